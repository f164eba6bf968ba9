use jaccard::{
    jaccard_components_text, jaccard_distance_text, jaccard_index_text, jaccard_text,
    CustomTokenizer, JaccardConfig, Lemmatizer, TokenMode, TokenizeConfig,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn french_normalizing() -> TokenizeConfig {
    TokenizeConfig::words()
        .with_lowercase(true)
        .with_strip_punctuation(true)
        .with_default_stopwords(true)
        .with_normalize_plural(true)
        .with_default_synonyms(true)
}

#[test]
fn duplicates_count_with_multiplicity() {
    let cfg = JaccardConfig::new(TokenizeConfig::words());
    let result = jaccard_text("good good day", "good day", &cfg).unwrap();
    assert_eq!(result.components(), (2, 3));
    assert!(close(result.index.unwrap(), 2.0 / 3.0));
    assert!(close(result.distance.unwrap(), 1.0 / 3.0));
}

#[test]
fn word_order_only_matters_with_positions() {
    let base = TokenizeConfig::words().with_lowercase(true);
    let bag = JaccardConfig::new(base.clone());
    let aligned = JaccardConfig::new(base).with_positions(true);

    let a = "Dog bites man";
    let b = "Man bites dog";
    assert_eq!(jaccard_index_text(a, b, &bag).unwrap(), Some(1.0));
    let positional = jaccard_index_text(a, b, &aligned).unwrap().unwrap();
    assert!(close(positional, 1.0 / 3.0));
}

#[test]
fn char_mode_is_the_default() {
    let cfg = JaccardConfig::default();
    assert_eq!(
        jaccard_components_text("Je mange", "Je suis une grande", &cfg).unwrap(),
        (6, 16)
    );
    assert_eq!(
        jaccard_components_text(
            "Je mange",
            "Je suis une grande",
            &cfg.clone().with_positions(true)
        )
        .unwrap(),
        (2, 15)
    );
}

#[test]
fn plural_normalization_merges_forms() {
    let a = "banane mangue citron";
    let b = "banane mangues citron";

    let plain = JaccardConfig::new(TokenizeConfig::words());
    assert!(close(jaccard_index_text(a, b, &plain).unwrap().unwrap(), 0.5));

    let normalized = JaccardConfig::new(TokenizeConfig::words().with_normalize_plural(true));
    assert_eq!(jaccard_index_text(a, b, &normalized).unwrap(), Some(1.0));

    let positional = JaccardConfig::new(TokenizeConfig::words()).with_positions(true);
    assert!(close(
        jaccard_index_text(a, b, &positional).unwrap().unwrap(),
        2.0 / 3.0
    ));
}

#[test]
fn stopwords_and_synonyms_bring_paraphrases_together() {
    let cfg = JaccardConfig::new(french_normalizing());
    let a = "La voiture est plus rapide que l'auto";
    let b = "Cette automobile est très rapide";

    assert_eq!(cfg.tokenize(a).unwrap(), vec!["voiture", "rapide", "lauto"]);
    assert_eq!(cfg.tokenize(b).unwrap(), vec!["voiture", "rapide"]);
    assert!(close(
        jaccard_index_text(a, b, &cfg).unwrap().unwrap(),
        2.0 / 3.0
    ));
}

#[test]
fn custom_synonyms_and_stopwords() {
    let cfg = JaccardConfig::new(
        TokenizeConfig::words()
            .with_stop_words(["fidèle", "loyal"])
            .with_synonyms([("chien", "canin"), ("dog", "canin")]),
    );
    assert_eq!(
        jaccard_index_text("chien fidèle", "dog loyal", &cfg).unwrap(),
        Some(1.0)
    );
}

#[test]
fn custom_synonym_shadows_default() {
    let cfg = JaccardConfig::new(
        TokenizeConfig::words()
            .with_default_synonyms(true)
            .with_synonyms([("car", "bagnole")]),
    );
    assert_eq!(cfg.tokenize("car auto").unwrap(), vec!["bagnole", "voiture"]);
}

#[test]
fn synonym_folding_is_idempotent() {
    let cfg = JaccardConfig::new(french_normalizing());
    let once = cfg.tokenize("Car auto vite quick automobile").unwrap();
    let twice = cfg.tokenize(&once.join(" ")).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn ngram_count_follows_window_formula() {
    let text = "one two three four five six";
    for n in 1..=8usize {
        let cfg = JaccardConfig::new(TokenizeConfig::words().with_ngram_size(n));
        let tokens = cfg.tokenize(text).unwrap();
        assert_eq!(tokens.len(), 6usize.saturating_sub(n - 1), "n = {n}");
    }
}

#[test]
fn char_bigrams_join_without_separator() {
    let cfg = JaccardConfig::new(TokenizeConfig::default().with_ngram_size(2));
    assert_eq!(cfg.tokenize("abc").unwrap(), vec!["ab", "bc"]);

    let words = JaccardConfig::new(TokenizeConfig::words().with_ngram_size(2));
    assert_eq!(words.tokenize("a b c").unwrap(), vec!["a b", "b c"]);
}

#[test]
fn bigrams_separate_reordered_texts() {
    let unigram = JaccardConfig::new(TokenizeConfig::words());
    let bigram = JaccardConfig::new(TokenizeConfig::words().with_ngram_size(2));
    let a = "the cat sat on the mat";
    let b = "the mat sat on the cat";

    let loose = jaccard_index_text(a, b, &unigram).unwrap().unwrap();
    let strict = jaccard_index_text(a, b, &bigram).unwrap().unwrap();
    assert_eq!(loose, 1.0);
    assert!(strict < loose);
}

#[test]
fn custom_tokenizer_bypasses_pipeline() {
    let splitter = CustomTokenizer::from_fn(|text| {
        Ok(text.split(',').map(|s| s.trim().to_string()).collect())
    });
    let cfg = JaccardConfig::new(splitter);

    assert_eq!(
        cfg.tokenize("Red Apple, green pear").unwrap(),
        vec!["Red Apple", "green pear"]
    );
    assert_eq!(
        jaccard_components_text("a, b, b", "b, c", &cfg).unwrap(),
        (1, 4)
    );
}

#[test]
fn lemmatizer_runs_after_plural_and_before_synonyms() {
    let lemmatizer = Lemmatizer::from_fn(|token| {
        Ok(match token {
            "mangé" | "mangeai" => "manger".to_string(),
            "bagnole" => "car".to_string(),
            other => other.to_string(),
        })
    });
    let cfg = JaccardConfig::new(
        TokenizeConfig::words()
            .with_normalize_plural(true)
            .with_default_synonyms(true)
            .with_lemmatizer(lemmatizer),
    );

    assert_eq!(
        cfg.tokenize("mangé mangeais bagnoles").unwrap(),
        vec!["manger", "manger", "voiture"]
    );
}

#[test]
fn result_properties_hold_across_configurations() {
    let configs = [
        JaccardConfig::default(),
        JaccardConfig::default().with_positions(true),
        JaccardConfig::new(TokenizeConfig::words()),
        JaccardConfig::new(TokenizeConfig::words()).with_distinct_tokens(true),
        JaccardConfig::new(TokenizeConfig::words()).with_positions(true),
        JaccardConfig::new(french_normalizing().with_ngram_size(2)),
        JaccardConfig::new(TokenizeConfig::new().with_mode(TokenMode::Char).with_ngram_size(3)),
    ];
    let pairs = [
        ("good good day", "good day"),
        ("Le chat noir", "les chats noirs"),
        ("", "something"),
        ("a b c d", "d c b a"),
    ];

    for cfg in &configs {
        for (a, b) in pairs {
            let ab = jaccard_text(a, b, cfg).unwrap();
            let ba = jaccard_text(b, a, cfg).unwrap();
            assert_eq!(ab, ba, "asymmetric for {a:?} / {b:?} with {cfg:?}");
            assert!(ab.intersection <= ab.union);
            if let Some(index) = ab.index {
                assert!((0.0..=1.0).contains(&index));
            }

            if !cfg.tokenize(a).unwrap().is_empty() {
                assert_eq!(jaccard_index_text(a, a, cfg).unwrap(), Some(1.0));
                assert_eq!(jaccard_distance_text(a, a, cfg).unwrap(), Some(0.0));
            }
        }
    }
}

#[test]
fn texts_without_tokens_are_undefined() {
    let cfg = JaccardConfig::new(TokenizeConfig::words().with_default_stopwords(true));
    let result = jaccard_text("le la les", "the a an", &cfg).unwrap();
    assert_eq!(result.components(), (0, 0));
    assert_eq!(result.index, None);
    assert_eq!(result.distance, None);
}
