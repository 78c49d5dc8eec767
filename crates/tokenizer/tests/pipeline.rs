//! End-to-end tests over the public tokenizer API.

use eqtok_tokenizer::{
    EquationTokenizer, SequenceKind, TokenizerError, BOS_IDX, EOS_IDX, PAD_IDX, SEP_IDX, UNK_IDX,
};

const CORPUS: [&str; 4] = [
    "y = a*x**2 + b*x + c",
    "f(x) = sin(x) / x",
    "z = -y",
    "e^{i*pi} + 1 = 0",
];

fn trained() -> EquationTokenizer {
    let mut tokenizer = EquationTokenizer::builder().build().unwrap();
    tokenizer.train(&CORPUS).unwrap();
    tokenizer
}

#[test]
fn test_special_indices() {
    let tokenizer = trained();
    let source = tokenizer.source_vocab();
    let target = tokenizer.target_vocab().unwrap();

    for (literal, index) in [("<s>", BOS_IDX), ("<pad>", PAD_IDX), ("</s>", EOS_IDX), ("<unk>", UNK_IDX)] {
        assert_eq!(source.get_id(literal), Some(index));
        assert_eq!(target.get_id(literal), Some(index));
    }
    assert_eq!(source.get_id("<sep>"), Some(SEP_IDX));
    assert_eq!(target.get_id("<sep>"), None);
}

#[test]
fn test_target_vocabulary_first_seen_order() {
    let tokenizer = trained();
    let target = tokenizer.target_vocab().unwrap();

    // first equation, whitespace pass first, then identifiers
    let leading: Vec<&str> = target.tokens().skip(4).take(5).collect();
    assert_eq!(leading, vec![" ", "y", "a", "x", "b"]);
}

#[test]
fn test_vocabulary_rebuild_is_identical() {
    assert_eq!(trained().target_vocab(), trained().target_vocab());
}

#[test]
fn test_source_example() {
    let tokenizer = trained();
    let tokens = tokenizer.tokenize_source("12 -3.5");

    assert_eq!(tokens, vec!["<s>", "1", "2", "<sep>", "-", "3", ".", "5", "</s>"]);
    assert_eq!(tokenizer.decode_source(&tokens).unwrap(), "1 2   -3 . 5");
}

#[test]
fn test_target_happy_path() {
    let tokenizer = trained();
    let tokens = tokenizer.tokenize_target("x + y");

    assert_eq!(tokenizer.decode_target(&tokens).unwrap(), "x + y");
}

#[test]
fn test_trailing_number_is_overwritten() {
    let tokenizer = trained();
    let tokens = tokenizer.tokenize_target("x + 1");

    assert_eq!(tokens, vec!["<s>", "x", " ", "+", " ", "</s>"]);
    assert_eq!(tokenizer.decode_target(&tokens).unwrap(), "x + ");
}

#[test]
fn test_short_sequence_decode_fails() {
    let tokenizer = trained();

    assert!(matches!(
        tokenizer.decode_target(&["<s>"]),
        Err(TokenizerError::InvalidSequence { len: 1 })
    ));
    assert!(matches!(
        tokenizer.decode(SequenceKind::Source, &[BOS_IDX]),
        Err(TokenizerError::InvalidSequence { len: 1 })
    ));
}

#[test]
fn test_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let tokenizer = trained();
    tokenizer.save(dir.path()).unwrap();

    let loaded = EquationTokenizer::load(dir.path()).unwrap();
    assert_eq!(loaded.source_vocab(), tokenizer.source_vocab());
    assert_eq!(loaded.target_vocab(), tokenizer.target_vocab());

    let expr = "y = b*x + a";
    assert_eq!(
        loaded.encode_target(expr).unwrap(),
        tokenizer.encode_target(expr).unwrap()
    );
}

#[test]
fn test_load_untrained_tokenizer() {
    let dir = tempfile::tempdir().unwrap();
    EquationTokenizer::builder().build().unwrap().save(dir.path()).unwrap();

    let loaded = EquationTokenizer::load(dir.path()).unwrap();
    assert!(loaded.target_vocab().is_none());
    assert_eq!(loaded.source_vocab().len(), 17);
}
