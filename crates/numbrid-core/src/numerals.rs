//! Estonian number words for 0–99.
//!
//! Pure functions, no I/O. Every form is built from four digit tables:
//! teens take a `teist` suffix, round tens a `kümmend`/`kümnes` suffix, and
//! other two-digit numbers join the tens word and the unit word with a space.

use crate::types::NumeralForms;

/// Returned for every form when the number is 100 or larger.
pub const OUT_OF_RANGE: &str = "liiga rohkem";

/// Largest number with a word form.
pub const MAX_NUMBER: u32 = 99;

const CARDINAL: [&str; 10] = [
    "null", "üks", "kaks", "kolm", "neli", "viis", "kuus", "seitse", "kaheksa", "üheksa",
];

const ORDINAL_NOMINATIVE: [&str; 10] = [
    "nulline", "esimene", "teine", "kolmas", "neljas", "viies", "kuues", "seitsmes", "kaheksas",
    "üheksas",
];

const ORDINAL_GENITIVE: [&str; 10] = [
    "nullise",
    "esimese",
    "teise",
    "kolmanda",
    "neljanda",
    "viienda",
    "kuuenda",
    "seitsmenda",
    "kaheksanda",
    "üheksanda",
];

/// Stems used in front of `teist`/`kümne` in compound ordinals.
const ORDINAL_STEM: [&str; 10] = [
    "", "ühe", "kahe", "kolme", "nelja", "viie", "kuue", "seitsme", "kaheksa", "üheksa",
];

/// Suffix turning the genitive ordinal into the adessive.
const ADESSIVE_SUFFIX: &str = "l";

/// Which ordinal case table to draw the unit word from.
#[derive(Clone, Copy)]
enum OrdinalCase {
    Nominative,
    Genitive,
}

impl OrdinalCase {
    fn unit(self, digit: usize) -> &'static str {
        match self {
            Self::Nominative => ORDINAL_NOMINATIVE[digit],
            Self::Genitive => ORDINAL_GENITIVE[digit],
        }
    }

    /// Ending for ten, the teens and the round tens.
    fn ten_ending(self) -> &'static str {
        match self {
            Self::Nominative => "kümnes",
            Self::Genitive => "kümnenda",
        }
    }
}

/// Split `n` into (tens, units) digit indices. Caller guarantees `n <= 99`.
fn digits(n: u32) -> (usize, usize) {
    ((n / 10) as usize, (n % 10) as usize)
}

/// Cardinal (quantitive nominative): `kaks`, `kaksteist`, `kakskümmend kaks`.
pub fn cardinal(n: u32) -> String {
    if n > MAX_NUMBER {
        return OUT_OF_RANGE.to_string();
    }
    let (tens, units) = digits(n);
    match (tens, units) {
        (0, u) => CARDINAL[u].to_string(),
        (1, 0) => "kümme".to_string(),
        (1, u) => format!("{}teist", CARDINAL[u]),
        (t, 0) => format!("{}kümmend", CARDINAL[t]),
        (t, u) => format!("{}kümmend {}", CARDINAL[t], CARDINAL[u]),
    }
}

fn ordinal(n: u32, case: OrdinalCase) -> String {
    if n > MAX_NUMBER {
        return OUT_OF_RANGE.to_string();
    }
    let (tens, units) = digits(n);
    match (tens, units) {
        (0, u) => case.unit(u).to_string(),
        (1, 0) => case.ten_ending().to_string(),
        (1, u) => format!("{}teist{}", ORDINAL_STEM[u], case.ten_ending()),
        (t, 0) => format!("{}{}", ORDINAL_STEM[t], case.ten_ending()),
        (t, u) => format!("{}kümne {}", ORDINAL_STEM[t], case.unit(u)),
    }
}

/// Ordinal in the nominative case: `teine`, `kaheteistkümnes`.
pub fn ordinal_nominative(n: u32) -> String {
    ordinal(n, OrdinalCase::Nominative)
}

/// Ordinal in the genitive case: `teise`, `kahekümne teise`.
pub fn ordinal_genitive(n: u32) -> String {
    ordinal(n, OrdinalCase::Genitive)
}

/// Ordinal in the adessive case, i.e. genitive + `l`: `teisel`.
pub fn ordinal_adessive(n: u32) -> String {
    if n > MAX_NUMBER {
        return OUT_OF_RANGE.to_string();
    }
    ordinal_genitive(n) + ADESSIVE_SUFFIX
}

impl NumeralForms {
    /// Compute all four forms of `n`.
    pub fn new(n: u32) -> Self {
        Self {
            n,
            quantitive_nominative: cardinal(n),
            ordinal_nominative: ordinal_nominative(n),
            ordinal_genitive: ordinal_genitive(n),
            ordinal_adessive: ordinal_adessive(n),
        }
    }

    /// Words that get a cached audio clip. The genitive is only included on request.
    pub fn spoken_words(&self, include_genitive: bool) -> Vec<&str> {
        let mut words = vec![
            self.quantitive_nominative.as_str(),
            self.ordinal_nominative.as_str(),
            self.ordinal_adessive.as_str(),
        ];
        if include_genitive {
            words.push(self.ordinal_genitive.as_str());
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── single digits ───────────────────────────────────────────────

    #[test]
    fn digits_use_table_words() {
        for n in 0..10u32 {
            let i = n as usize;
            let forms = NumeralForms::new(n);
            assert_eq!(forms.quantitive_nominative, CARDINAL[i]);
            assert_eq!(forms.ordinal_nominative, ORDINAL_NOMINATIVE[i]);
            assert_eq!(forms.ordinal_genitive, ORDINAL_GENITIVE[i]);
            assert_eq!(forms.ordinal_adessive, format!("{}l", ORDINAL_GENITIVE[i]));
        }
    }

    #[test]
    fn two() {
        let forms = NumeralForms::new(2);
        assert_eq!(forms.quantitive_nominative, "kaks");
        assert_eq!(forms.ordinal_nominative, "teine");
        assert_eq!(forms.ordinal_genitive, "teise");
        assert_eq!(forms.ordinal_adessive, "teisel");
    }

    // ── ten and teens ───────────────────────────────────────────────

    #[test]
    fn ten() {
        let forms = NumeralForms::new(10);
        assert_eq!(forms.quantitive_nominative, "kümme");
        assert_eq!(forms.ordinal_nominative, "kümnes");
        assert_eq!(forms.ordinal_genitive, "kümnenda");
        assert_eq!(forms.ordinal_adessive, "kümnendal");
    }

    #[test]
    fn teens_take_teist_suffix() {
        for n in 11..20u32 {
            let u = (n % 10) as usize;
            assert_eq!(cardinal(n), format!("{}teist", CARDINAL[u]));
            assert_eq!(
                ordinal_nominative(n),
                format!("{}teistkümnes", ORDINAL_STEM[u])
            );
            assert_eq!(
                ordinal_genitive(n),
                format!("{}teistkümnenda", ORDINAL_STEM[u])
            );
        }
    }

    #[test]
    fn thirteen() {
        assert_eq!(cardinal(13), "kolmteist");
        assert_eq!(ordinal_nominative(13), "kolmeteistkümnes");
        assert_eq!(ordinal_adessive(13), "kolmeteistkümnendal");
    }

    // ── round tens ──────────────────────────────────────────────────

    #[test]
    fn round_tens_take_kummend_suffix() {
        for t in 2..10u32 {
            let n = t * 10;
            let i = t as usize;
            assert_eq!(cardinal(n), format!("{}kümmend", CARDINAL[i]));
            assert_eq!(ordinal_nominative(n), format!("{}kümnes", ORDINAL_STEM[i]));
            assert_eq!(ordinal_genitive(n), format!("{}kümnenda", ORDINAL_STEM[i]));
        }
    }

    #[test]
    fn fifty() {
        let forms = NumeralForms::new(50);
        assert_eq!(forms.quantitive_nominative, "viiskümmend");
        assert_eq!(forms.ordinal_nominative, "viiekümnes");
        assert_eq!(forms.ordinal_adessive, "viiekümnendal");
    }

    // ── compound numbers ────────────────────────────────────────────

    #[test]
    fn compounds_are_two_tokens() {
        for n in 21..100u32 {
            if n % 10 == 0 {
                continue;
            }
            let (t, u) = ((n / 10) as usize, (n % 10) as usize);
            let word = cardinal(n);
            assert_eq!(word, format!("{}kümmend {}", CARDINAL[t], CARDINAL[u]));
            assert_eq!(word.split(' ').count(), 2, "{n}: {word}");
        }
    }

    #[test]
    fn forty_two() {
        let forms = NumeralForms::new(42);
        assert_eq!(forms.quantitive_nominative, "nelikümmend kaks");
        assert_eq!(forms.ordinal_nominative, "neljakümne teine");
        assert_eq!(forms.ordinal_genitive, "neljakümne teise");
        assert_eq!(forms.ordinal_adessive, "neljakümne teisel");
    }

    #[test]
    fn ninety_nine() {
        let forms = NumeralForms::new(99);
        assert_eq!(forms.quantitive_nominative, "üheksakümmend üheksa");
        assert_eq!(forms.ordinal_nominative, "üheksakümne üheksas");
        assert_eq!(forms.ordinal_adessive, "üheksakümne üheksandal");
    }

    // ── out of range ────────────────────────────────────────────────

    #[test]
    fn out_of_range_returns_sentinel() {
        for n in [100, 101, 250, u32::MAX] {
            let forms = NumeralForms::new(n);
            assert_eq!(forms.quantitive_nominative, OUT_OF_RANGE);
            assert_eq!(forms.ordinal_nominative, OUT_OF_RANGE);
            assert_eq!(forms.ordinal_genitive, OUT_OF_RANGE);
            assert_eq!(forms.ordinal_adessive, OUT_OF_RANGE);
        }
    }

    // ── properties ──────────────────────────────────────────────────

    #[test]
    fn formatting_is_pure() {
        for n in 0..=110u32 {
            assert_eq!(NumeralForms::new(n), NumeralForms::new(n));
        }
    }

    #[test]
    fn all_forms_non_empty() {
        for n in 0..=MAX_NUMBER {
            let forms = NumeralForms::new(n);
            for word in forms.spoken_words(true) {
                assert!(!word.is_empty(), "{n}");
            }
        }
    }

    #[test]
    fn spoken_words_skip_genitive_by_default() {
        let forms = NumeralForms::new(7);
        assert_eq!(
            forms.spoken_words(false),
            vec!["seitse", "seitsmes", "seitsmendal"]
        );
        assert_eq!(forms.spoken_words(true).last(), Some(&"seitsmenda"));
    }
}
