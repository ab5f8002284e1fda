//! Input tokenizing for the REPL.

/// Splits `input` on whitespace and lowercases every word.
pub fn clean_input(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello world  ", vec!["hello", "world"]),
            (
                "Charmander Bulbasaur PIKACHU",
                vec!["charmander", "bulbasaur", "pikachu"],
            ),
            (
                "   Multiple   Spaces   Between   Words   ",
                vec!["multiple", "spaces", "between", "words"],
            ),
            ("MiXeD CaSe WoRdS", vec!["mixed", "case", "words"]),
            ("\tcatch\tPikachu\n", vec!["catch", "pikachu"]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_clean_input_blank() {
        assert!(clean_input("").is_empty());
        assert!(clean_input("   \t  ").is_empty());
    }

    proptest! {
        #[test]
        fn prop_words_are_lowercase_and_nonempty(input in "[ a-zA-Z\t]{0,40}") {
            for word in clean_input(&input) {
                prop_assert!(!word.is_empty());
                prop_assert!(!word.contains(char::is_whitespace));
                prop_assert_eq!(word.to_lowercase(), word);
            }
        }
    }
}
