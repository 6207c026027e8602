//! Staging translations, then enriching a lexicon and collating verses from them.

use b3_parser::b3::collate::{collate, ChapterFilter};
use b3_parser::b3::lexicon::{LexiconEnricher, LexiconSettings, RawLexicon};
use b3_parser::b3::testing::{osis_document, usfx_document};
use b3_parser::b3::transforms::standard::{ENGLISH_USFX, HEBREW_OSIS};
use b3_parser::b3::translit::TranslitSettings;
use b3_parser::b3::{B3Error, Language, VerseRecord};
use std::collections::HashMap;

const HEBREW_LEXICON: &str = r#"var strongsHebrewDictionary = {
"H7225":{"lemma":"רֵאשִׁית","xlit":"rêʼshîyth","pron":"ray-sheeth'","derivation":"from the same as H7218;","strongs_def":"the first, in place, time, order or rank","kjv_def":"beginning, chief(-est), first(-fruits, part, time)"},
"H430":{"lemma":"אֱלֹהִים","xlit":"ʼĕlôhîym","pron":"el-o-heem'","strongs_def":"gods in the ordinary sense","kjv_def":"angels, God, judge"},
"H853":{"lemma":"אֵת","xlit":"ʼêth","pron":"ayth","strongs_def":"properly, self","kjv_def":"(as such unrepresented in English)"},
"H9999":{"lemma":"אָדָם"}};
module.exports = strongsHebrewDictionary;"#;

fn stage_hebrew() -> Vec<VerseRecord> {
    let body = r#"<verse osisID="Gen.1.1"><w lemma="b/7225">בְּ/רֵאשִׁ֖ית</w> <w lemma="1254 a">בָּרָ֣א</w> <w lemma="430">אֱלֹהִ֑ים</w> <w lemma="853">אֵ֥ת</w> <w lemma="d/8064">הַ/שָּׁמַ֖יִם</w> <w lemma="c/853">וְ/אֵ֥ת</w> <w lemma="d/776">הָ/אָֽרֶץ</w></verse>
<verse osisID="Gen.1.2"><w lemma="c/d/776">וְ/הָ/אָ֗רֶץ</w></verse>"#;
    HEBREW_OSIS
        .run(osis_document(body).into_bytes())
        .expect("hebrew stage")
}

fn stage_english() -> Vec<VerseRecord> {
    let body = r#"<book id="GEN"><p><v bcv="GEN.1.1"/>In the <w s="H7225">beginning</w> God created.<ve/><v bcv="GEN.1.2"/>And the earth was void.<ve/></p></book>
<book id="EXO"><p><v bcv="EXO.1.1"/>Now these are the names.<ve/></p></book>"#;
    ENGLISH_USFX
        .run(usfx_document(body).into_bytes())
        .expect("english stage")
}

fn hebrew_enricher() -> LexiconEnricher {
    LexiconEnricher::new(
        Language::Hebrew,
        LexiconSettings::default(),
        TranslitSettings::default(),
    )
}

#[test]
fn test_hebrew_lexicon_from_staged_source() {
    let raw = RawLexicon::from_js_module(HEBREW_LEXICON).unwrap();
    assert_eq!(raw.len(), 4);

    let staged = HashMap::from([("hewlc".to_string(), stage_hebrew())]);
    let lexicon = hebrew_enricher().enrich(&raw, &staged).unwrap();
    assert_eq!(lexicon.len(), 4);

    let beginning = &lexicon["H7225"];
    assert_eq!(beginning.tlit, "re'shith");
    assert_eq!(beginning.def, "the first, in place, time, order or rank");
    assert_eq!(beginning.deriv, "from the same as H7218;");
    assert_eq!(beginning.pron.as_deref(), Some("ray-sheeth'"));
    assert_eq!(beginning.count, 1);
    assert_eq!(beginning.refs, vec!["Gen.1.1"]);

    assert_eq!(lexicon["H430"].tlit, "elohim");
    assert_eq!(lexicon["H430"].deriv, "");

    // twice in one verse: counted twice, listed once
    assert_eq!(lexicon["H853"].count, 2);
    assert_eq!(lexicon["H853"].refs, vec!["Gen.1.1"]);

    assert_eq!(lexicon["H9999"].count, 0);
    assert_eq!(lexicon["H9999"].pron, None);
}

#[test]
fn test_enrichment_requires_the_source_translation() {
    let raw = RawLexicon::from_js_module(HEBREW_LEXICON).unwrap();
    let staged = HashMap::from([("enkjv".to_string(), stage_english())]);
    let err = hebrew_enricher().enrich(&raw, &staged).unwrap_err();
    assert!(matches!(err, B3Error::Precondition { ref translation, .. } if translation == "hewlc"));
    assert_eq!(
        err.to_string(),
        "translation 'hewlc' has not been staged; run `stage hewlc` first"
    );
}

#[test]
fn test_english_has_no_lexicon_source() {
    let raw = RawLexicon::default();
    let staged = HashMap::from([("enkjv".to_string(), stage_english())]);
    let err = LexiconEnricher::new(
        Language::English,
        LexiconSettings::default(),
        TranslitSettings::default(),
    )
    .enrich(&raw, &staged)
    .unwrap_err();
    assert!(matches!(err, B3Error::Lookup { .. }));
}

#[test]
fn test_collate_staged_translations() {
    let staged = vec![
        ("hewlc".to_string(), stage_hebrew()),
        ("enkjv".to_string(), stage_english()),
    ];
    let verses = collate(staged, &ChapterFilter::All);
    let keys: Vec<_> = verses.iter().map(|v| v.key.to_string()).collect();
    assert_eq!(keys, vec!["Gen.1.1", "Gen.1.2", "Exod.1.1"]);

    let names: Vec<_> = verses[0]
        .translations
        .iter()
        .map(|t| (t.lan.as_str(), t.translation.as_str()))
        .collect();
    assert_eq!(names, vec![("he", "WLC"), ("en", "KJV")]);
    assert_eq!(verses[2].translations.len(), 1);
}

#[test]
fn test_collate_with_chapter_filter() {
    let staged = vec![
        ("hewlc".to_string(), stage_hebrew()),
        ("enkjv".to_string(), stage_english()),
    ];
    let filter: ChapterFilter = "Exod".parse().unwrap();
    let verses = collate(staged, &filter);
    assert_eq!(verses.len(), 1);
    assert_eq!(verses[0].key.chapter_id, "Exod.1");

    let json = serde_json::to_value(&verses[0]).unwrap();
    assert_eq!(json["chapterId"], "Exod.1");
    assert_eq!(json["verseNum"], 1);
    assert_eq!(json["translations"][0]["translation"], "KJV");
    assert_eq!(json["translations"][0]["lan"], "en");
}
