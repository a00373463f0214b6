// WASM bindings for triespell.
//
// Provides a `WasmSpeller` class exported via wasm-bindgen that wraps a
// `SuggestionEngine`. Scored candidates are serialized to JavaScript values
// using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const speller = new WasmSpeller(["program", "problem", "cache"]);
//   speller.containsWord("Cache");        // => true
//   speller.suggest("progrm", 5);         // => ["program"]
//   speller.candidates("progrm", 5);      // => [{ word: "program", distance: 1, frequency: 1 }]
//   speller.addWord("queue");
//   speller.wordCount();                  // => 4

use serde::Serialize;
use wasm_bindgen::prelude::*;

use triespell::{SuggestionCandidate, SuggestionEngine, SuggestionOptions};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a scored suggestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCandidate {
    word: String,
    distance: usize,
    frequency: u32,
}

impl From<SuggestionCandidate> for JsCandidate {
    fn from(c: SuggestionCandidate) -> Self {
        Self {
            word: c.word,
            distance: c.distance,
            frequency: c.frequency,
        }
    }
}

// ============================================================================
// WasmSpeller
// ============================================================================

/// Trie-backed spelling suggestions for WebAssembly.
#[wasm_bindgen]
pub struct WasmSpeller {
    engine: SuggestionEngine,
}

#[wasm_bindgen]
impl WasmSpeller {
    /// Create a speller from an array of dictionary words.
    ///
    /// Repeated words count as more frequent.
    #[wasm_bindgen(constructor)]
    pub fn new(words: Vec<String>) -> WasmSpeller {
        let mut engine = SuggestionEngine::new();
        engine.load_dictionary(&words);
        WasmSpeller { engine }
    }

    /// Create a speller from newline- or space-separated text.
    #[wasm_bindgen(js_name = "fromText")]
    pub fn from_text(text: &str) -> Result<WasmSpeller, JsError> {
        let words = triespell::wordlist::load_from_reader(text.as_bytes())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmSpeller::new(words))
    }

    /// Add one word to the dictionary.
    #[wasm_bindgen(js_name = "addWord")]
    pub fn add_word(&mut self, word: &str) {
        self.engine.add_word(word);
    }

    /// Check whether a word is in the dictionary (case-insensitive).
    #[wasm_bindgen(js_name = "containsWord")]
    pub fn contains_word(&self, word: &str) -> bool {
        self.engine.contains_word(word)
    }

    /// Check whether any dictionary word starts with the prefix.
    #[wasm_bindgen(js_name = "hasPrefix")]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.engine.has_prefix(prefix)
    }

    /// Suggest up to `max` corrections, best first.
    pub fn suggest(&self, word: &str, max: usize) -> Vec<String> {
        self.engine.get_suggestions(word, max)
    }

    /// Suggest up to `max` corrections with their distance and frequency.
    ///
    /// Returns a JavaScript array of `{ word, distance, frequency }` objects.
    pub fn candidates(&self, word: &str, max: usize) -> Result<JsValue, JsError> {
        let js_candidates: Vec<JsCandidate> = self
            .engine
            .candidates(word, max)
            .into_iter()
            .map(JsCandidate::from)
            .collect();
        serde_wasm_bindgen::to_value(&js_candidates).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Number of distinct dictionary words.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.engine.word_count()
    }

    /// Every dictionary word in alphabetical order.
    pub fn words(&self) -> js_sys::Array {
        self.engine
            .dictionary()
            .words()
            .into_iter()
            .map(|w| JsValue::from_str(&w))
            .collect()
    }

    /// Set the largest edit distance at which words are suggested.
    #[wasm_bindgen(js_name = "setMaxDistance")]
    pub fn set_max_distance(&mut self, value: usize) {
        self.engine.set_options(SuggestionOptions {
            max_distance: value,
            ..self.engine.options()
        });
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {
        // Drop self, releasing all resources.
    }
}
