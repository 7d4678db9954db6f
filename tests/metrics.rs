//! Reference scores for the public metrics.

use simmetrics::prelude::*;

fn approx(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
}

#[test]
fn levenshtein_reference() {
    assert_eq!(Levenshtein.absolute_similarity("kitten", "sitting"), 3.0);
    assert_eq!(Levenshtein.similarity("", ""), 1.0);
    approx(Levenshtein.similarity("flaw", "lawn"), 0.5);
}

#[test]
fn jaro_winkler_reference() {
    approx(Jaro.similarity("MARTHA", "MARHTA"), 0.9444);
    approx(JaroWinkler::default().similarity("MARTHA", "MARHTA"), 0.9611);
    approx(JaroWinkler::default().similarity("DWAYNE", "DUANE"), 0.84);
}

#[test]
fn soundex_reference() {
    let soundex = Soundex::default().length(4);
    assert_eq!(soundex.encode("Robert"), "R163");
    assert_eq!(soundex.encode("Rupert"), "R163");
    assert_eq!(soundex.encode("Ashcraft"), "A226");
    assert_eq!(soundex.similarity("Robert", "Rupert"), 1.0);
    // numbers have no code
    assert_eq!(soundex.similarity("123", "456"), 0.0);
    assert!(ChapmanOrderedName::default().similarity("unit 12", "unit 99") < 0.5);
}

#[test]
fn qgram_tokenizer_reference() {
    let tokenizer = QGramTokenizer::new(3).unwrap();
    assert_eq!(tokenizer.tokenize("abcd"), ["abc", "bcd"]);
    assert!(tokenizer.tokenize("ab").is_empty());
    assert!(QGramTokenizer::new(0).is_err());
}

#[test]
fn monge_elkan_is_asymmetric() {
    let monge_elkan = MongeElkan::default();
    let forward = monge_elkan.similarity("paul", "paul johnson");
    let backward = monge_elkan.similarity("paul johnson", "paul");
    assert_eq!(forward, 1.0);
    assert_ne!(forward, backward);
}

#[test]
fn token_set_reference() {
    let (a, b) = ("a b c d", "c d e");
    approx(Jaccard::default().similarity(a, b), 2.0 / 5.0);
    approx(Dice::default().similarity(a, b), 4.0 / 7.0);
    approx(Cosine::default().similarity(a, b), 2.0 / 12f64.sqrt());
    approx(Overlap::default().similarity(a, b), 2.0 / 3.0);
    approx(MatchingCoefficient::default().similarity(a, b), 2.0 / 4.0);
    approx(BlockDistance::default().similarity(a, b), 1.0 - 3.0 / 7.0);
}

#[test]
fn alignment_reference() {
    assert_eq!(SmithWaterman::default().absolute_similarity("GATTACA", "ATTAC"), 5.0);
    approx(SmithWaterman::default().similarity("GATTACA", "ATTAC"), 1.0);
    assert_eq!(NeedlemanWunsch::default().absolute_similarity("GATTACA", "GCATGCU"), 4.0);
    assert_eq!(SmithWatermanGotoh::default().absolute_similarity("GATTACA", "ATTAC"), 25.0);
}

#[test]
fn metrics_share_across_threads() {
    let metric: Arc<dyn StringMetric> = Arc::new(TagLink::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let metric = Arc::clone(&metric);
            std::thread::spawn(move || metric.similarity("john smith", "jon smith"))
        })
        .collect();
    let scores: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn explain_levenshtein() {
    insta::assert_snapshot!(Levenshtein.explain("kitten", "sitting"), @r#"Levenshtein("kitten", "sitting") = 0.571"#);
}

#[test]
fn explain_soundex() {
    insta::assert_snapshot!(
        Soundex::default().explain("Robert", "Rupert"),
        @r#"Soundex(6, JaroWinkler(Jaro))("Robert" -> R16300, "Rupert" -> R16300) = 1.000"#
    );
}

#[test]
fn explain_tag_link_token() {
    let explained = TagLinkToken::default().explain("abcd", "abdc").replace('\t', " ");
    insta::assert_snapshot!(explained, @r#"
    TagLinkToken(tr=0.3)
    T="abcd" U="abdc"
    Ti Uj Sij
    a a 1.000
    b b 1.000
    c c 0.700
    d d 0.700
    S(T,U)=0.880
    matched=4
    "#);
}

#[test]
fn explain_normalized_metric() {
    let options = MetricOptionsBuilder::default()
        .metric(MetricKind::Jaro)
        .normalize(true)
        .build()
        .unwrap();
    let metric = options.build_metric().unwrap();
    insta::assert_snapshot!(metric.explain("Café", "Cafe"), @r#"Jaro("Cafe", "Cafe") = 1.000"#);
}
