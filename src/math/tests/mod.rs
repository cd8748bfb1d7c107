mod tests_numeric;
