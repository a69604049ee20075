use std::fs;

use typeahead::{Prompt, PromptError};
use wordtrie::PrefixIndex;

const VOCABULARY: [&str; 7] = ["hello", "world", "how", "are", "you", "doing", "today"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let index = load_vocabulary()?;
    let mut prompt = Prompt::new(index);

    println!("Completing words as you type; Tab accepts, 'q' or 'quit' quits the loop.");

    loop {
        match prompt.read_word(Some("Enter a word: ".to_string())) {
            Ok(word) => match word.trim() {
                "q" | "quit" => {
                    return Ok(());
                },
                _ => {
                    println!("You entered: {word}");
                },
            },
            Err(PromptError::Interrupted) => {
                return Ok(());
            },
            Err(e) => {
                return Err(e.into());
            },
        }
    }
}

fn load_vocabulary() -> Result<PrefixIndex, Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let _ = args.next();

    match args.next() {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let index = PrefixIndex::from_words(text.split_whitespace())?;

            Ok(index)
        },
        None => {
            let index = PrefixIndex::from_words(VOCABULARY)?;

            Ok(index)
        },
    }
}
