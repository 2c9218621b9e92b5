// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Integration tests for loading a dictionary through the configuration layer.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use lehua_lib::config::ConfigLoader;
use lehua_lib::data_structures::lehua_trie::TraversalMode;
use lehua_lib::dictionary::Dictionary;

const WORDS: &str = "\
walk;verb;to move along on foot
sky;noun;the region of the atmosphere seen from the earth
lie;noun;a false statement
";

#[test]
fn test_dictionary_from_config_file() {
    let dir = tempdir().unwrap();
    let words_path = dir.path().join("words.txt");
    fs::write(&words_path, WORDS).unwrap();

    let config_path = dir.path().join("lehua.toml");
    fs::write(
        &config_path,
        format!(
            "[trie]\ntraversal = \"recursive\"\n\n[dictionary]\npath = {:?}\ndelimiter = \";\"\n",
            words_path.display().to_string()
        ),
    )
    .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_DICT_IT").load().unwrap();
    assert_eq!(config.trie.traversal, TraversalMode::Recursive);

    let dictionary = Dictionary::from_config(&config.dictionary, config.trie).unwrap();
    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.trie().traversal(), TraversalMode::Recursive);

    for word in &config.dictionary.lookup_words {
        assert!(dictionary.lookup(word).unwrap().is_some(), "{word} missing");
    }

    let nouns: Vec<&str> = dictionary
        .words_with_part_of_speech(&config.dictionary.part_of_speech)
        .into_iter()
        .map(|meta| meta.word.as_str())
        .collect();
    assert_eq!(nouns, vec!["lie", "sky"]);
}

#[test]
fn test_missing_dictionary_file() {
    let result = Dictionary::load(Path::new("/nonexistent/words.csv"), ',', Default::default());
    let error = result.unwrap_err();
    assert!(error.to_string().contains("/nonexistent/words.csv"));
}
