use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::string::*;
use crate::value::Value;

const ALPHABET: &[char] = &['a', 'b', 'Z', ' ', '!', 'é', 'ß', '語'];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..24);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn reverse_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let text = random_text(&mut rng);
        let once = reverse_string(&Value::from(text.as_str())).unwrap();
        let twice = reverse_string(&Value::from(once)).unwrap();
        assert_eq!(twice, text);
    }
}

#[test]
fn text_joined_with_its_reverse_is_palindrome() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let text = random_text(&mut rng);
        let mirrored = format!("{text}{}", reverse_string(&Value::from(text.as_str())).unwrap());
        assert!(is_palindrome(&Value::from(mirrored)).unwrap());
    }
}
