use spelling_core::persistence::{load_from_disk, save_to_disk};
use spelling_core::{Engine, EngineConfig, EquivalenceTable};

#[test]
fn reference_word_from_placeholders() {
    let engine = Engine::new();
    let out = engine.variants("ɲʊ.pan");
    for expected in ["nyou.pan", "niou.pan", "nyiou.pan", "nyo.pan", "nyu.pan"] {
        assert!(out.contains(&expected.to_string()), "missing {expected}");
    }
    let mut sorted = out.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(out, sorted);
}

#[test]
fn raw_generation_keeps_duplicates_for_the_caller() {
    let table = EquivalenceTable::from_pairs([('A', ["x", "xx"])]).unwrap();
    let engine = Engine::with_table(table);
    // x+xx and xx+x meet across the morpheme boundary.
    let raw = engine.generate_variations("A·A");
    assert_eq!(raw, vec!["xx", "xxx", "xxx", "xxxx"]);
    assert_eq!(engine.variants("A·A"), vec!["xx", "xxx", "xxxx"]);
}

#[test]
fn synthetic_two_family_table() {
    let table = EquivalenceTable::from_pairs([('A', ["a1", "a2"]), ('B', ["b1", "b2"])]).unwrap();
    let engine = Engine::with_table(table);
    assert_eq!(engine.variants("AB"), vec!["a1b1", "a1b2", "a2b1"]);
}

#[test]
fn spelling_from_raw_input() {
    let engine = Engine::new();
    let out = engine.spell("Nga'ni");
    // "Ng" is upper case and does not match the ng digraph.
    assert!(out.iter().all(|v| v.starts_with("Nga’")));
    assert_eq!(out, vec!["Nga’ni", "Nga’ny", "Nga’nyi"]);
}

#[test]
fn config_file_swaps_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");

    let mut config = EngineConfig::default();
    config.equivalences = EquivalenceTable::from_pairs([('ʃ', ["sh", "s"])]).unwrap();
    save_to_disk(&config, &path).unwrap();

    let engine = Engine::from_file(&path).unwrap();
    assert_eq!(engine.spell("shap"), vec!["sap", "shap"]);
    assert_eq!(load_from_disk(&path).unwrap(), config);
}
