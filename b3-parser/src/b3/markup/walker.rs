//! The markup walk
//!
//!     Elements are visited in document order with an explicit stack. Each element is entered
//!     (its role handled, its inline text consumed), then its children are walked, then it is
//!     left (container verses close, its tail is consumed). That keeps every piece of text in
//!     the order it appears in the source:
//!
//!         <verse osisID="Gen.1.1"/>In <w>the</w> beginning
//!
//!         Enter verse   -> active key Gen.1.1
//!         Leave verse   -> tail "In "        -> Other
//!         Enter w       -> "the"             -> Word
//!         Leave w       -> tail " beginning" -> Other
//!
//!     Two pieces of state drive the walk, both held in [WalkState]: the active verse and the
//!     number of elements still to swallow below a note. Tokens are only emitted while a verse
//!     is active.

use crate::b3::error::B3Error;
use crate::b3::markup::tree::Element;
use crate::b3::markup::{osis, usfx, Dialect, NodeRole};
use crate::b3::profile::TranslationProfile;
use crate::b3::token::{KeyedToken, Token, TokenKind};
use crate::b3::verse::{VerseKey, OVERRIDE_MARKER};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerseState {
    #[default]
    Outside,
    Inside(VerseKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkState {
    pub verse: VerseState,
    /// Elements left to skip below the current note
    pub skip_depth: usize,
}

impl WalkState {
    /// Consume one skipped element. Returns false once nothing is left to skip.
    pub fn swallow(&mut self) -> bool {
        if self.skip_depth == 0 {
            return false;
        }
        self.skip_depth -= 1;
        true
    }

    pub fn start_verse(&mut self, key: VerseKey) {
        self.verse = VerseState::Inside(key);
    }

    pub fn end_verse(&mut self) {
        self.verse = VerseState::Outside;
    }

    pub fn active_key(&self) -> Option<&VerseKey> {
        match &self.verse {
            VerseState::Inside(key) => Some(key),
            VerseState::Outside => None,
        }
    }
}

enum Frame<'a> {
    Enter(&'a Element),
    Leave { el: &'a Element, swallowed: bool },
}

/// Output of one walk, plus what is needed to patch alternate readings.
///
/// Other text is merged across pieces (tails, glyphs, container text) of the same verse, and
/// whitespace is collapsed across those merges too: `"a "` followed by `" b"` gives `"a b"`.
#[derive(Default)]
struct Emitter {
    tokens: Vec<KeyedToken>,
    /// Index of the first token of the last ketiv word, while it can still be replaced
    pending_ketiv: Option<usize>,
    overrides: usize,
}

impl Emitter {
    fn push(&mut self, key: &VerseKey, token: Token) {
        self.tokens.push(KeyedToken {
            key: key.clone(),
            token,
        });
    }

    /// Append to the previous Other token of the same verse, or start a new one.
    fn push_other(&mut self, key: &VerseKey, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.tokens.last_mut() {
            Some(last) if last.token.kind == TokenKind::Other && last.key == *key => {
                let text = if last.token.text.ends_with(' ') {
                    text.strip_prefix(' ').unwrap_or(text)
                } else {
                    text
                };
                last.token.text.push_str(text);
            }
            _ => self.push(key, Token::other(text)),
        }
    }
}

/// Newlines become spaces and whitespace runs collapse to one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Walks one document tree into a flat, keyed token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupWalker {
    profile: TranslationProfile,
}

impl MarkupWalker {
    pub fn new(profile: TranslationProfile) -> Self {
        MarkupWalker { profile }
    }

    pub fn profile(&self) -> &TranslationProfile {
        &self.profile
    }

    pub fn walk(&self, root: &Element) -> Result<Vec<KeyedToken>, B3Error> {
        let mut state = WalkState::default();
        let mut out = Emitter::default();
        let mut stack = vec![Frame::Enter(root)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(el) => {
                    let swallowed = state.swallow();
                    if !swallowed {
                        self.enter(el, &mut state, &mut out)?;
                    }
                    stack.push(Frame::Leave { el, swallowed });
                    stack.extend(el.children.iter().rev().map(Frame::Enter));
                }
                Frame::Leave { el, swallowed } => {
                    if !swallowed {
                        self.leave(el, &mut state, &mut out);
                    }
                }
            }
        }

        tracing::debug!(
            dialect = ?self.profile.dialect,
            tokens = out.tokens.len(),
            kjv_overrides = out.overrides,
            "walked document"
        );
        Ok(out.tokens)
    }

    fn enter(
        &self,
        el: &Element,
        state: &mut WalkState,
        out: &mut Emitter,
    ) -> Result<(), B3Error> {
        match self.profile.dialect.classify(el)? {
            NodeRole::VerseStart(key) => state.start_verse(key),
            NodeRole::VerseEnd => state.end_verse(),
            NodeRole::Note => {
                self.enter_note(el, state, out)?;
                state.skip_depth = el.descendant_count();
            }
            NodeRole::Word { lemma, ketiv } => {
                let Some(key) = state.active_key() else {
                    return Ok(());
                };
                let text = el.text.as_deref().unwrap_or("");
                if text.is_empty() {
                    return Ok(());
                }
                let start = out.tokens.len();
                for token in self.word_tokens(text, lemma) {
                    out.push(key, token);
                }
                let emitted = out.tokens.len() > start;
                out.pending_ketiv = (ketiv && emitted).then_some(start);
            }
            NodeRole::Glyph(glyph) => {
                if let Some(key) = state.active_key() {
                    out.push_other(key, glyph);
                }
            }
            NodeRole::Text => {
                if let (Some(key), Some(text)) = (state.active_key(), el.text.as_deref()) {
                    out.push_other(key, &collapse_whitespace(text));
                }
            }
            NodeRole::Plain => {}
        }
        Ok(())
    }

    /// Versification overrides and alternate readings; the note's subtree is skipped after.
    fn enter_note(
        &self,
        note: &Element,
        state: &mut WalkState,
        out: &mut Emitter,
    ) -> Result<(), B3Error> {
        let text = note.text.as_deref().unwrap_or("");
        if self.profile.kjv_versification && text.starts_with(OVERRIDE_MARKER) {
            state.start_verse(VerseKey::parse_override(text)?);
            out.overrides += 1;
            return Ok(());
        }

        if self.profile.dialect != Dialect::Osis {
            return Ok(());
        }
        let Some(key) = out
            .pending_ketiv
            .and_then(|start| out.tokens.get(start))
            .map(|first| first.key.clone())
        else {
            return Ok(());
        };
        let qere = osis::qere_words(note);
        if qere.is_empty() {
            return Ok(());
        }
        if let Some(start) = out.pending_ketiv.take() {
            out.tokens.truncate(start);
        }
        for word in qere {
            let text = word.text.as_deref().unwrap_or("");
            if !text.is_empty() {
                for token in self.word_tokens(text, word.attr("lemma")) {
                    out.push(&key, token);
                }
            }
            if let Some(tail) = word.tail.as_deref() {
                out.push_other(&key, &collapse_whitespace(tail));
            }
        }
        out.push_other(&key, " ");
        Ok(())
    }

    fn word_tokens(&self, text: &str, lemma: Option<&str>) -> Vec<Token> {
        let mut tokens = self.profile.word_tags.parse(text, lemma);
        if self.profile.dialect == Dialect::Usfx {
            if let Some(strongs) = lemma {
                usfx::attach_codes(&mut tokens, strongs, self.profile.language.code_prefix());
            }
        }
        tokens
    }

    fn leave(&self, el: &Element, state: &mut WalkState, out: &mut Emitter) {
        if self.profile.dialect.closes_verse(el) {
            state.end_verse();
        }
        if let (Some(key), Some(tail)) = (state.active_key(), el.tail.as_deref()) {
            out.push_other(key, &collapse_whitespace(tail));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b3::markup::tree::parse_tree;

    fn walk(profile: TranslationProfile, source: &str) -> Vec<KeyedToken> {
        let root = parse_tree(source).unwrap();
        MarkupWalker::new(profile).walk(&root).unwrap()
    }

    fn texts(tokens: &[KeyedToken]) -> Vec<(String, &str)> {
        tokens
            .iter()
            .map(|t| (t.key.to_string(), t.token.text.as_str()))
            .collect()
    }

    #[test]
    fn test_walk_state_swallow() {
        let mut state = WalkState {
            skip_depth: 2,
            ..Default::default()
        };
        assert!(state.swallow());
        assert!(state.swallow());
        assert!(!state.swallow());
        assert_eq!(state.skip_depth, 0);
    }

    #[test]
    fn test_milestone_verses() {
        let tokens = walk(
            TranslationProfile::english_usfx(),
            r#"<usfx><book id="GEN"><p><v id="1" bcv="GEN.1.1"/>In the <w s="H7225">beginning</w>.<ve/>
            ignored<v id="2" bcv="GEN.1.2"/>And<ve/></p></book></usfx>"#,
        );
        assert_eq!(
            texts(&tokens),
            vec![
                ("Gen.1.1".to_string(), "In the "),
                ("Gen.1.1".to_string(), "beginning"),
                ("Gen.1.1".to_string(), "."),
                ("Gen.1.2".to_string(), "And"),
            ]
        );
        assert_eq!(tokens[1].token.lexical_code.as_deref(), Some("H7225"));
    }

    #[test]
    fn test_container_verse_ends_with_its_end_tag() {
        let tokens = walk(
            TranslationProfile::greek_osis(),
            r#"<chapter><verse osisID="Matt.1.1"><w lemma="strong:G976">a</w> </verse> after</chapter>"#,
        );
        assert_eq!(
            texts(&tokens),
            vec![("Matt.1.1".to_string(), "a"), ("Matt.1.1".to_string(), " ")]
        );
    }

    #[test]
    fn test_note_subtree_is_skipped_but_not_its_tail() {
        let tokens = walk(
            TranslationProfile::greek_osis(),
            r#"<div><verse sID="Matt.1.1" osisID="Matt.1.1"/><w>a</w><note>skip <w>b</w> me</note> c<verse eID="Matt.1.1"/></div>"#,
        );
        assert_eq!(
            texts(&tokens),
            vec![("Matt.1.1".to_string(), "a"), ("Matt.1.1".to_string(), " c")]
        );
    }

    #[test]
    fn test_kjv_override_rekeys_following_tokens() {
        let source = r#"<div><verse sID="Gen.1.31" osisID="Gen.1.31"/><w lemma="1">a</w><note type="x-alternateVersification">KJV:Gen.2.1a</note><w lemma="2">b</w><verse eID="Gen.1.31"/></div>"#;
        let tokens = walk(TranslationProfile::hebrew_osis(), source);
        assert_eq!(tokens[0].key, VerseKey::new("Gen.1", 31));
        assert_eq!(tokens[1].key, VerseKey::new("Gen.2", 1));

        let profile = TranslationProfile::hebrew_osis().with_kjv_versification(false);
        let tokens = walk(profile, source);
        assert!(tokens.iter().all(|t| t.key == VerseKey::new("Gen.1", 31)));
    }

    #[test]
    fn test_glyphs_merge_into_previous_other_token() {
        let tokens = walk(
            TranslationProfile::hebrew_osis(),
            r#"<div><verse osisID="Gen.1.1"><w lemma="1">a</w><seg type="x-maqqef">־</seg><w lemma="2">b</w> <seg type="x-sof-pasuq">׃</seg></verse></div>"#,
        );
        let texts: Vec<_> = tokens.iter().map(|t| t.token.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "\u{05BE}", "b", " \u{05C3}"]);
    }

    #[test]
    fn test_unknown_glyph_is_fatal() {
        let root = parse_tree(r#"<verse osisID="Gen.1.1"><seg type="x-bogus"/></verse>"#).unwrap();
        let err = MarkupWalker::new(TranslationProfile::hebrew_osis())
            .walk(&root)
            .unwrap_err();
        assert!(matches!(err, B3Error::Lookup { .. }));
    }

    #[test]
    fn test_nothing_is_emitted_without_a_verse() {
        let tokens = walk(
            TranslationProfile::english_usfx(),
            r#"<usfx><book id="GEN"><p>Title <w>word</w> tail</p></book></usfx>"#,
        );
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tails_collapse_whitespace() {
        let tokens = walk(
            TranslationProfile::english_usfx(),
            "<p><v bcv=\"GEN.1.1\"/>a\n\n   b<f>note</f>\n c<ve/></p>",
        );
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token.text, "a b c");
    }

    #[test]
    fn test_ketiv_replaced_by_qere() {
        let tokens = walk(
            TranslationProfile::hebrew_osis(),
            r#"<div><verse osisID="Gen.8.17"><w lemma="1">x</w> <w type="x-ketiv" lemma="3318">k</w><note type="variant"><catchWord>k</catchWord><rdg type="x-qere"><w lemma="3318">q</w></rdg></note><w lemma="2">y</w></verse></div>"#,
        );
        let texts: Vec<_> = tokens.iter().map(|t| t.token.text.as_str()).collect();
        assert_eq!(texts, vec!["x", " ", "q", " ", "y"]);
        assert_eq!(tokens[2].token.lexical_code.as_deref(), Some("H3318"));
    }

    #[test]
    fn test_multi_word_qere_keeps_separators() {
        let tokens = walk(
            TranslationProfile::hebrew_osis(),
            r#"<div><verse osisID="Gen.8.17"><w type="x-ketiv" lemma="1">k</w><note type="variant"><rdg type="x-qere"><w lemma="2">a</w> <w lemma="3">b</w></rdg></note><w lemma="4">y</w></verse></div>"#,
        );
        let texts: Vec<_> = tokens.iter().map(|t| t.token.text.as_str()).collect();
        assert_eq!(texts, vec!["a", " ", "b", " ", "y"]);
    }

    #[test]
    fn test_ketiv_without_tokens_is_not_replaced() {
        let tokens = walk(
            TranslationProfile::hebrew_osis(),
            r#"<div><verse osisID="Gen.8.17"><w lemma="1">x</w> <w type="x-ketiv" lemma="1/2">/</w><note type="variant"><rdg type="x-qere"><w lemma="3318">q</w></rdg></note></verse></div>"#,
        );
        let texts: Vec<_> = tokens.iter().map(|t| t.token.text.as_str()).collect();
        assert_eq!(texts, vec!["x", " "]);
    }

    #[test]
    fn test_self_closing_verse_start_stays_open() {
        let tokens = walk(
            TranslationProfile::greek_osis(),
            r#"<div><verse osisID="Matt.1.1"/><w lemma="strong:G976">a</w> <w lemma="strong:G1078">b</w></div>"#,
        );
        assert_eq!(
            texts(&tokens),
            vec![
                ("Matt.1.1".to_string(), "a"),
                ("Matt.1.1".to_string(), " "),
                ("Matt.1.1".to_string(), "b"),
            ]
        );
    }

    #[test]
    fn test_merged_other_text_collapses_spaces() {
        let tokens = walk(
            TranslationProfile::english_usfx(),
            r#"<p><v bcv="GEN.1.1"/>a <f>note</f> b<ve/></p>"#,
        );
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token.text, "a b");
    }
}
