//! 독일어 표기 규칙

use crate::core::jamo::*;
use crate::core::phoneme::Phoneme::{Final, Initial, Vowel};
use crate::language::{Language, Normalizer};
use crate::notation::Notation;
use crate::notation::Replacement::Delete;

/// 모음 (대문자는 규칙 내부 표시: A=ä, O=ö, U=어 발음의 er)
const VOWELS: &str = "aeiouäöüyAOU";
/// 자음
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxzß";

/// 독일어 표기 규칙
///
/// 앞쪽은 철자를 발음 기호 비슷한 중간 표기로 바꾸는 규칙,
/// 뒤쪽은 중간 표기를 자모로 확정하는 규칙입니다.
pub fn notation() -> Notation {
    Notation::new()
        .rule("ä", "A")
        .rule("ö", "O")
        .rule("ü", "y")
        .rule("{a|A|e}ue", "au.e")
        .rule("ae", "A")
        .rule("oe", "O")
        .rule("ue", "y")
        .rule("berg$", "bErk")
        .rule("burg$", "burk")
        .rule("bundes", "bundeS")
        .rule("x", "ks")
        .rule("b$", "p")
        .rule("d$", "t")
        .rule("sch", "Z")
        .rule("{a|o|u}ch", "X")
        .rule("ch", "x")
        .rule("{@}g$", "x")
        .rule("{@}h{<cons>}", Delete)
        .rule("{@}h$", Delete)
        .rule("rr", "r")
        .rule("ll", "l")
        .rule("er$", "U")
        .rule("{@}r$", "U")
        .rule("eu", "oi")
        .rule("Au", "oi")
        .rule("ie", "i")
        .rule("ei", "ai")
        .rule("nn", "n")
        .rule("mm", "m")
        .rule("tt", "t")
        .rule("pp", "p")
        .rule("aa", "a")
        .rule("ee", "e")
        .rule("ph", "f")
        .rule("pf", "f")
        .rule("th", "t")
        .rule("kh", "k")
        .rule("dt", "t")
        .rule("ck", "k")
        .rule("c{A|e|i|y}", "C")
        .rule("c", "k")
        .rule("C", "c")
        .rule("tz", "z")
        .rule("ng{@|l}", "Ng")
        .rule("ng", "N")
        .rule("ss", "S")
        .rule("ß", "S")
        .rule("{@}st", "St")
        .rule("ts", "c")
        .rule("s$", "S")
        .rule("s{<cons>}", "Z")
        .rule("tZ", "T")
        .rule("Z{@}", "Sj")
        .rule("Z$", "Sju")
        .rule("Z{<cons>}", "Sju")
        .rule("T{@}", "cj")
        .rule("T$", "cj")
        .rule("T{<cons>}", "cj")
        .rule("x{<cons>}", "xi")
        .rule("x$", "xi")
        // er 단독, 또는 자음 하나 + er
        .rule("^U$", [Vowel(E), Vowel(EO)])
        .rule("{^(<cons>)}U$", [Vowel(E), Vowel(EO)])
        .rule("X", [Initial(H)]) // ach-Laut
        .rule("x", [Initial(H)]) // ich-Laut
        .rule("b", [Initial(B)])
        .rule("c", [Initial(C)])
        .rule("d", [Initial(D)])
        .rule("f", [Initial(P)])
        .rule("g", [Initial(G)])
        .rule("k", [Initial(K)])
        .rule("{@}l{@}", [Final(L), Initial(L)])
        .rule("^l", [Initial(L)])
        .rule("l{@}", [Final(L), Initial(L)])
        .rule("l", [Final(L)])
        .rule("m{@}", [Initial(M)])
        .rule("m", [Final(M)])
        .rule("n{@}", [Initial(N)])
        .rule("n", [Final(N)])
        .rule("N", [Final(NG)])
        .rule("h", [Initial(H)])
        .rule("p", [Initial(P)])
        .rule("r", [Initial(L)])
        .rule("s", [Initial(J)])
        .rule("S", [Initial(S)])
        .rule("t", [Initial(T)])
        .rule("v", [Initial(P)])
        .rule("w", [Initial(B)])
        .rule("z", [Initial(C)])
        .rule("ja", [Vowel(YA)])
        .rule("je", [Vowel(YE)])
        .rule("ji", [Vowel(I)])
        .rule("jo", [Vowel(YO)])
        .rule("ju", [Vowel(YU)])
        .rule("jy", [Vowel(WI)])
        .rule("jO", [Vowel(OE)])
        .rule("jA", [Vowel(YE)])
        .rule("jU", [Vowel(YEO)])
        .rule("U", [Vowel(EO)])
        .rule("a", [Vowel(A)])
        .rule("e", [Vowel(E)])
        .rule("E", [Vowel(E)])
        .rule("i", [Vowel(I)])
        .rule("o", [Vowel(O)])
        .rule("u", [Vowel(U)])
        .rule("A", [Vowel(E)])
        .rule("O", [Vowel(OE)])
        .rule("y", [Vowel(WI)])
        .rule("j", [Vowel(I)])
}

/// 독일어
pub fn german() -> Language {
    Language::builder("de", notation())
        .with_name("German")
        .with_vowels(VOWELS)
        .with_macro("cons", CONSONANTS)
        // 움라우트와 ß 는 지우지 않음
        .with_normalizer(Normalizer::roman_preserving(&[
            ('Ä', 'ä'),
            ('Ö', 'ö'),
            ('Ü', 'ü'),
            ('ß', 'ß'),
        ]))
        .build()
}
