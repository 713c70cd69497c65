//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use linguee_api::{
        search_url, AudioLink, ExtractionOutcome, LanguageCode, PageParser, UsageFrequency,
    };

    use crate::common::{parser, read_page};

    fn page(query: &str, src: LanguageCode, dst: LanguageCode) -> String {
        read_page(&search_url(query, src, dst, false))
    }

    #[test]
    fn correction_page_suggests_query() {
        let markup = page("constibado", LanguageCode::PT, LanguageCode::EN);

        match parser().parse_search_result(&markup) {
            ExtractionOutcome::Correction { suggested_query } => {
                assert_eq!(suggested_query, "constipado")
            }
            other => panic!("expected a correction, got {:?}", other),
        }
    }

    #[test]
    fn page_without_results_is_not_found() {
        let markup = page("xxxxzzzz", LanguageCode::PT, LanguageCode::EN);

        assert!(matches!(
            parser().parse_search_result(&markup),
            ExtractionOutcome::NotFound
        ));
    }

    #[test]
    fn bacalhau_header() {
        let markup = page("bacalhau", LanguageCode::PT, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();

        assert_eq!(result.src_lang, "pt");
        assert_eq!(result.dst_lang, "en");
        assert_eq!(result.resolved_query, "bacalhau");
        assert_eq!(result.original_query, "bacalhau");
        assert_eq!(result.correct_query, "bacalhau");
    }

    #[test]
    fn bacalhau_lemmas() {
        let markup = page("bacalhau", LanguageCode::PT, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();

        assert_eq!(result.lemmas.len(), 2);

        let lemma = &result.lemmas[0];
        assert!(lemma.featured);
        assert_eq!(lemma.text, "bacalhau");
        assert_eq!(lemma.pos.as_deref(), Some("noun, masculine"));
        assert_eq!(lemma.grammar_info, None);
        assert_eq!(
            lemma.audio_links,
            vec![
                AudioLink {
                    url: "https://www.linguee.com/mp3/PT_BR/f5/f5491d72610965dd0a287c1ab1025c0f-300.mp3"
                        .to_string(),
                    lang: "Brazilian Portuguese".to_string(),
                },
                AudioLink {
                    url: "https://www.linguee.com/mp3/PT_PT/3a/3a2a6b29fa2a8c4b3a5af3a6c9a3b5b0-300.mp3"
                        .to_string(),
                    lang: "European Portuguese".to_string(),
                },
            ]
        );

        let multi_word = &result.lemmas[1];
        assert!(!multi_word.featured);
        assert_eq!(multi_word.text, "bacalhau seco");
        assert!(multi_word.audio_links.is_empty());
        assert_eq!(multi_word.translations.len(), 1);
        assert_eq!(multi_word.translations[0].text, "stockfish");
    }

    #[test]
    fn bacalhau_translations() {
        let markup = page("bacalhau", LanguageCode::PT, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();
        let translations = &result.lemmas[0].translations;

        assert_eq!(translations.len(), 2);

        let cod = &translations[0];
        assert!(cod.featured);
        assert_eq!(cod.text, "cod");
        assert_eq!(cod.pos.as_deref(), Some("noun"));
        assert_eq!(cod.usage_frequency, Some(UsageFrequency::AlmostAlways));
        assert_eq!(cod.audio_links.len(), 2);
        assert_eq!(cod.audio_links[1].lang, "British English");
        assert_eq!(cod.examples.len(), 1);
        assert_eq!(cod.examples[0].src, "O bacalhau é o prato nacional.");
        assert_eq!(cod.examples[0].dst, "Cod is the national dish.");

        let codfish = &translations[1];
        assert!(!codfish.featured);
        assert_eq!(codfish.text, "codfish");
        assert_eq!(codfish.usage_frequency, None);
        assert!(codfish.audio_links.is_empty());
        assert!(codfish.examples.is_empty());
    }

    #[test]
    fn bacalhau_examples() {
        let markup = page("bacalhau", LanguageCode::PT, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();

        assert_eq!(result.examples.len(), 1);
        let example = &result.examples[0];
        assert_eq!(example.text, "bacalhau fresco");
        assert_eq!(example.pos.as_deref(), Some("m"));
        assert_eq!(example.translations.len(), 1);
        assert_eq!(example.translations[0].text, "fresh cod");
        assert_eq!(example.translations[0].pos.as_deref(), Some("noun"));
    }

    #[test]
    fn bacalhau_external_sources() {
        let markup = page("bacalhau", LanguageCode::PT, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();
        let sources = &result.external_sources;

        assert_eq!(sources.len(), 2);
        assert_eq!(
            sources[0].src,
            "Na cozinha portuguesa, o bacalhau é preparado de mil maneiras."
        );
        assert_eq!(
            sources[0].dst,
            "In Portuguese cuisine, cod is prepared in a thousand ways."
        );
        assert_eq!(
            sources[0].src_url.as_deref(),
            Some("http://www.portugal.pt/cozinha.html")
        );
        assert_eq!(
            sources[0].dst_url.as_deref(),
            Some("http://www.portugal.pt/en/cuisine.html")
        );

        assert_eq!(sources[1].dst, "We export salted cod.");
        assert_eq!(
            sources[1].src_url.as_deref(),
            Some("http://www.pescanova.pt/produtos")
        );
        assert_eq!(sources[1].dst_url.as_deref(), Some("http://pescanova.com"));
    }

    #[test]
    fn grammar_info_of_german_verb() {
        let markup = page("bringen", LanguageCode::DE, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();
        let lemma = &result.lemmas[0];

        assert_eq!(lemma.text, "bringen");
        assert_eq!(lemma.grammar_info.as_deref(), Some("Akk"));
        assert_eq!(lemma.pos.as_deref(), Some("verb"));

        let texts: Vec<&str> = lemma.translations.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["bring", "take"]);
        assert_eq!(lemma.translations[0].usage_frequency, Some(UsageFrequency::Often));
        assert_eq!(lemma.translations[1].usage_frequency, None);
    }

    #[test]
    fn source_domain_without_link() {
        let markup = page("einfach", LanguageCode::DE, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();

        assert!(result.examples.is_empty());
        assert_eq!(result.external_sources.len(), 1);

        let source = &result.external_sources[0];
        assert_eq!(source.src, "Die Bedienung ist einfach.");
        assert_eq!(source.dst, "Operation is simple.");
        assert_eq!(source.src_url.as_deref(), Some("http://bosch.de"));
        assert_eq!(source.dst_url.as_deref(), Some("http://bosch.com"));
    }

    #[test]
    fn lemma_without_word_type_has_no_pos() {
        let markup = page("constipado", LanguageCode::PT, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();
        let lemma = &result.lemmas[0];

        assert_eq!(lemma.pos.as_deref(), Some("adjective / past participle, masculine"));
        assert_eq!(lemma.translations[0].pos.as_deref(), Some("adjective"));
        assert_eq!(lemma.translations[1].text, "having a cold");
        assert_eq!(lemma.translations[1].pos, None);
    }

    #[test]
    fn result_serializes_with_snake_case_keys() {
        let markup = page("bringen", LanguageCode::DE, LanguageCode::EN);
        let result = parser().parse_search_result_page(&markup).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["lemmas"][0]["grammar_info"], "Akk");
        assert_eq!(json["lemmas"][0]["translations"][0]["usage_frequency"], "often");
        assert!(json["lemmas"][0]["translations"][1]["usage_frequency"].is_null());
        assert_eq!(json["external_sources"], serde_json::json!([]));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use linguee_api::{ExtractionOutcome, PageParser};

    use crate::common::parser;

    #[test]
    fn page_without_data_header_is_an_extraction_error() {
        let markup = r#"<div class="exact"></div>"#;

        match parser().parse_search_result(markup) {
            ExtractionOutcome::Error(error) => {
                assert!(error.to_string().contains("\"src_lang\""), "{}", error)
            }
            other => panic!("expected an extraction error, got {:?}", other),
        }
    }

    #[test]
    fn lemma_without_translations_is_rejected() {
        let markup = r#"
            <div id="data" data-lang1="DE" data-lang2="EN" data-query="x"
                 data-correctspellingofquery="x"></div>
            <div class="exact">
              <div class="lemma"><span class="tag_lemma"><a class="dictLink">x</a></span></div>
            </div>"#;

        let error = parser().parse_search_result_page(markup).unwrap_err();
        assert!(error.to_string().contains("\"translations\""), "{}", error);
    }

    #[test]
    fn correction_wins_over_results() {
        let markup = r#"
            <div id="data" data-lang1="DE" data-lang2="EN" data-query="x"
                 data-correctspellingofquery="y"></div>
            <span class="corrected"> y </span>"#;

        assert!(matches!(
            parser().parse_search_result(markup),
            ExtractionOutcome::Correction { ref suggested_query } if suggested_query == "y"
        ));
    }
}
