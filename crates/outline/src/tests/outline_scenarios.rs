//! End-to-end outline scenarios: segmentation through rendering.

use crate::hash::{hash_document, hash_paragraph, Digest};
use crate::{build_outline, paragraphs, run, OutlineOptions};
use parahash_core::{AppError, Representation};

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Helper to run the whole pipeline into a string.
fn render(text: &str, options: &OutlineOptions) -> String {
    let mut out = Vec::new();
    run(&mut text.as_bytes(), &mut out, options).unwrap();
    String::from_utf8(out).unwrap()
}

fn options(rep: Representation, ptlen: i64, dtlen: i64) -> OutlineOptions {
    OutlineOptions {
        rep,
        para_title_len: ptlen,
        doc_title_len: dtlen,
    }
}

#[test]
fn test_hello_world_scenario() {
    let input = "Hello *world*.\n\nSecond  para.";
    let output = render(input, &OutlineOptions::default());

    let first = hash_paragraph("Hello world.");
    let second = hash_paragraph("Second para.");
    let document = hash_document(&[first, second]);

    let expected = format!(
        "# {}\n\n## {}\n\nHello *world*.\n\n## {}\n\nSecond  para.\n",
        &document.to_string()[..8],
        &first.to_string()[..4],
        &second.to_string()[..4],
    );
    assert_eq!(output, expected);
}

#[test]
fn test_empty_input() {
    let output = render("", &OutlineOptions::default());
    assert_eq!(output, format!("# {}\n", &EMPTY_SHA256[..8]));

    let blank = render("\n\n   \n\n\t\n", &OutlineOptions::default());
    assert_eq!(blank, output);
}

#[test]
fn test_deterministic() {
    let input = "One.\n\nTwo [links](http://x).\n\n_Three_";
    for rep in Representation::ALL {
        let opts = options(rep, 0, 0);
        assert_eq!(render(input, &opts), render(input, &opts));
    }
}

#[test]
fn test_heading_count_matches_paragraphs() {
    let input = "a\n\nb\n\n\n\nc\n\n  \n\nd\ne";
    let output = render(input, &OutlineOptions::default());

    let headings = output.lines().filter(|l| l.starts_with("## ")).count();
    assert_eq!(headings, paragraphs(input).len());
    assert_eq!(headings, 4);
    assert_eq!(output.lines().filter(|l| l.starts_with("# ")).count(), 1);
}

#[test]
fn test_order_preserved() {
    let input = "alpha\n\nbeta\n\ngamma";
    let output = render(input, &OutlineOptions::default());

    let alpha = output.find("\nalpha\n").unwrap();
    let beta = output.find("\nbeta\n").unwrap();
    let gamma = output.find("\ngamma\n").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[test]
fn test_formatting_does_not_change_digests() {
    let plain = build_outline("a b\n\nhi", &options(Representation::Hex, 0, 0)).unwrap();
    let styled = build_outline("a  b\n\n*hi*", &options(Representation::Hex, 0, 0)).unwrap();

    assert_eq!(plain.digest, styled.digest);
    assert_eq!(plain.sections[0].title, styled.sections[0].title);
    assert_ne!(plain.sections[1].text, styled.sections[1].text);
}

#[test]
fn test_aggregate_sensitivity() {
    let opts = options(Representation::Hex, 0, 0);
    let before = build_outline("one\n\ntwo\n\nthree", &opts).unwrap();
    let after = build_outline("one\n\ntwo!\n\nthree", &opts).unwrap();

    assert_ne!(before.digest, after.digest);
    assert_eq!(before.sections[0].digest, after.sections[0].digest);
    assert_ne!(before.sections[1].digest, after.sections[1].digest);
}

#[test]
fn test_base58_untruncated_titles() {
    let outline = build_outline("first\n\nsecond", &options(Representation::Base58, 0, 8)).unwrap();

    for section in &outline.sections {
        assert!(section.title.len() >= 40);
        assert!(!section.title.contains(' '));
    }
    assert_eq!(outline.title.chars().count(), 8);
}

#[test]
fn test_bip39_titles_are_words() {
    let outline = build_outline("first\n\nsecond", &options(Representation::Bip39, 4, 8)).unwrap();

    assert_eq!(outline.title.split(' ').count(), 8);
    for section in &outline.sections {
        assert_eq!(section.title.split(' ').count(), 4);
    }
}

#[test]
fn test_title_length_too_long_is_error() {
    let err = build_outline("para", &options(Representation::Hex, 65, 8)).unwrap_err();
    assert!(matches!(err, AppError::Truncation { .. }));

    let err = build_outline("para", &options(Representation::Bip39, 4, 25)).unwrap_err();
    assert!(matches!(err, AppError::Truncation { unit: "words", .. }));
}

#[test]
fn test_too_long_paragraph_title_ignored_without_paragraphs() {
    let outline = build_outline("", &options(Representation::Hex, 100, 8)).unwrap();
    assert_eq!(outline.paragraph_count(), 0);
    assert_eq!(outline.document_digest(), &Digest::of(b""));
}

#[test]
fn test_invalid_utf8_input() {
    let mut out = Vec::new();
    let bytes: &[u8] = &[0x66, 0x6f, 0xff, 0x6f];
    let err = run(&mut &bytes[..], &mut out, &OutlineOptions::default()).unwrap_err();

    assert!(matches!(err, AppError::Encoding(_)));
    assert!(out.is_empty());
}

#[test]
fn test_run_to_file() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    let mut file = temp.reopen().unwrap();

    let outline = run(
        &mut "x\n\ny".as_bytes(),
        &mut file,
        &OutlineOptions::default(),
    )
    .unwrap();

    let written = std::fs::read_to_string(temp.path()).unwrap();
    assert_eq!(outline.paragraph_count(), 2);
    assert!(written.starts_with(&format!("# {}", &outline.digest.to_string()[..8])));
    assert!(written.ends_with("\n\ny\n"));
}

#[test]
fn test_positions_follow_document_order() {
    let outline = build_outline("a\n\n\n\nb\n\n  \n\nc", &OutlineOptions::default()).unwrap();
    let positions: Vec<usize> = outline.sections.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);

    let paras = paragraphs("x\n\ny");
    assert_eq!(paras[1].position, 1);
    assert_eq!(paras[1].original, "y");
}
