//! 마케도니아어 표기 규칙

use crate::core::jamo::*;
use crate::core::phoneme::Phoneme::{Final, Initial, Vowel};
use crate::language::{Language, Normalizer};
use crate::notation::Notation;
use crate::notation::Replacement::Delete;

const VOWELS: &str = "аеиоу";
/// 자음
const CONSONANTS: &str = "бвгдѓжзѕклљмнњпрстќфхцчџш";
/// 무성 자음
const VOICELESS: &str = "кпстќфхцчш";
/// 규칙 내부 표시: `,` = 받침으로 읽음, `;` = 초성으로 읽음
const MARKERS: &str = ",;";
/// 대문자 -> 소문자 (ѓ, ќ 등이 분해되지 않도록 보존)
const UPPERCASE: &str = "АБВГДЃЕЖЗЅИЈКЛЉМНЊОПРСТЌУФХЦЧЏШ";
const LOWERCASE: &str = "абвгдѓежзѕијклљмнњопрстќуфхцчџш";

/// 마케도니아어 표기 규칙
pub fn notation() -> Notation {
    Notation::new()
        .rule("град", "град-")
        .rule("ѓураѓ", "џураџ")
        .rule("срѓан", "срџан")
        // 겹자음
        .rule("бб", "б")
        .rule("вв", "в")
        .rule("вф", "ф")
        .rule("гг", "г")
        .rule("дд", "д")
        .rule("дж", "џ")
        .rule("дц", "ц")
        .rule("дч", "ч")
        .rule("жж", "ж")
        .rule("зз", "з")
        .rule("зс", "с")
        .rule("кк", "к")
        .rule("лл", "л")
        .rule("{@}мм{@}", "м,м")
        .rule("мм", "м")
        .rule("{@}нн{@}", "н,н")
        .rule("нн", "н")
        .rule("пп", "п")
        .rule("рр", "р")
        .rule("сс", "с")
        .rule("тт", "т")
        .rule("тц", "ц")
        .rule("тч", "ч")
        .rule("фф", "ф")
        .rule("хх", "х")
        .rule("цц", "ц")
        .rule("чч", "ч")
        .rule("шш", "ш")
        .rule("шч", "ш")
        .rule("{ѓ|ж|з|ѕ|ќ|ц|ч|џ|ш}ј{@}", Delete)
        .rule("иј{<cs>}", "и")
        .rule("иј$", "и")
        .rule("дз$", "ѕ")
        .rule("дз{<cs>}", "ѕ")
        .rule("дс$", "ц")
        .rule("дс{<cs>}", "ц")
        .rule("тс", "ц")
        .rule("дз", "з")
        .rule("тз", "з")
        .rule("нкт", "Nт")
        // 무성음 앞과 어말의 유성 자음
        .rule("б{<vl>}", "п")
        .rule("б$", "п")
        .rule("в{<vl>}", "ф")
        .rule("в$", "ф")
        .rule("г{<vl>}", "к")
        .rule("г$", "к")
        .rule("д{<vl>}", "т")
        .rule("д$", "т")
        .rule("ж{<vl>}", "ш")
        .rule("ж$", "ш")
        .rule("з{<vl>}", "с")
        .rule("з$", "с")
        .rule("ѕ{<vl>}", "ц")
        .rule("ѕ$", "ц")
        .rule("џ{<vl>}", "ч")
        .rule("џ$", "ч")
        .rule("ѓ{<vl>}", "ќ")
        .rule("ѓ$", "ќ")
        .rule("б{<vl>}", "п")
        .rule("в{<vl>}", "ф")
        .rule("г{<vl>}", "к")
        .rule("д{<vl>}", "т")
        .rule("ж{<vl>}", "ш")
        .rule("з{<vl>}", "с")
        .rule("ѕ{<vl>}", "ц")
        .rule("џ{<vl>}", "ч")
        .rule("ѓ{<vl>}", "ќ")
        .rule("{@}к{<vl>}", "к,")
        .rule("{@}п{<vl>}", "п,")
        .rule("{<cs>}ј{@}", "и")
        .rule("ѓ{а|о|у}", "гј")
        .rule("ѓ{е|и}", "г")
        .rule("ѓ", "ѕи")
        .rule("ќ{а|о|у}", "кј")
        .rule("ќ{е|и}", "к")
        .rule("ќ", "ци")
        .rule("љ{а|о|у}", "лј")
        .rule("љ", "л")
        .rule("њ{а|о|у}", "нј")
        .rule("њ", "н")
        .rule("ж{@}", "з")
        .rule("ж", "зу")
        .rule("ч{@}", "ц")
        .rule("ч", "чи")
        .rule("џ{@}", "ѕ")
        .rule("џ", "ѕи")
        .rule("ш{@}", "сј")
        .rule("ш$", "си")
        .rule("ш", "сју")
        // л, м, н 의 초성/받침 결정
        .rule("^л", "л;")
        .rule("^м", "м;")
        .rule("^н", "н;")
        .rule("л$", "л,")
        .rule("м$", "м,")
        .rule("н$", "н,")
        .rule("л{@|ј|м,|н,|N}", "л;")
        .rule("м{@}", "м;")
        .rule("н{@|ј}", "н;")
        .rule("л", "л,")
        .rule("м", "м,")
        .rule("н", "н,")
        .rule(",,", ",")
        .rule(",;", Delete)
        .rule(",л,", "л,")
        .rule(",м,", "м,")
        .rule(",н,", "н,")
        .rule("л{м;|н;}", "л,")
        .rule(";|-", Delete)
        .rule("б", [Initial(B)])
        .rule("в", [Initial(B)])
        .rule("г", [Initial(G)])
        .rule("д", [Initial(D)])
        .rule("ж", [Initial(J)])
        .rule("з", [Initial(J)])
        .rule("ѕ", [Initial(J)])
        .rule("к,", [Final(G)])
        .rule("к", [Initial(K)])
        .rule("^л", [Initial(L)])
        .rule("{,}л", [Initial(L)])
        .rule("л,", [Final(L)])
        .rule("л", [Final(L), Initial(L)])
        .rule("м,", [Final(M)])
        .rule("м", [Initial(M)])
        .rule("н,", [Final(N)])
        .rule("н", [Initial(N)])
        .rule("N", [Final(NG)])
        .rule("п,", [Final(B)])
        .rule("п", [Initial(P)])
        .rule("р", [Initial(L)])
        .rule("с", [Initial(S)])
        .rule("т", [Initial(T)])
        .rule("ф", [Initial(P)])
        .rule("х", [Initial(H)])
        .rule("ц", [Initial(C)])
        .rule("ч", [Initial(C)])
        .rule("ја", [Vowel(YA)])
        .rule("је", [Vowel(YE)])
        .rule("ји", [Vowel(I)])
        .rule("јо", [Vowel(YO)])
        .rule("ју", [Vowel(YU)])
        .rule("ј", [Vowel(I)])
        .rule("а", [Vowel(A)])
        .rule("е", [Vowel(E)])
        .rule("и", [Vowel(I)])
        .rule("о", [Vowel(O)])
        .rule("у", [Vowel(U)])
}

/// 마케도니아어
pub fn macedonian() -> Language {
    Language::builder("mkd", notation())
        .with_name("Macedonian")
        .with_vowels(VOWELS)
        .with_macro("cs", CONSONANTS)
        .with_macro("vl", VOICELESS)
        .with_markers(MARKERS)
        .with_normalizer(normalizer())
        .build()
}

fn normalizer() -> Normalizer {
    let pairs: Vec<(char, char)> = UPPERCASE.chars().zip(LOWERCASE.chars()).collect();
    Normalizer::roman_preserving(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hangulize(text: &str) -> String {
        macedonian().hangulize(text).unwrap()
    }

    #[test]
    fn test_compiles() {
        assert!(macedonian().compile().is_ok());
    }

    #[test]
    fn test_words() {
        assert_eq!(hangulize("Скопје"), "스코피에");
        assert_eq!(hangulize("Македонија"), "마케도니야");
    }

    #[test]
    fn test_accented_vowels() {
        // ѐ, ѝ 는 강세 표시만 지움
        assert_eq!(hangulize("сѐ"), hangulize("се"));
        assert_eq!(hangulize("сѐ"), "세");
        assert_eq!(hangulize("ѝ"), "이");
    }

    #[test]
    fn test_normalization_keeps_letters() {
        let lang = macedonian();
        assert_eq!(lang.normalize("ЃОРЃИ Ќ"), "ѓорѓи ќ");
        assert_eq!(lang.normalize("СЀ"), "се");
    }

    #[test]
    fn test_dz_before_consonant() {
        // дз + 자음 -> ѕ, 무성음 앞에서는 ц
        assert_eq!(hangulize("адзма"), "아즈마");
        assert_eq!(hangulize("адзка"), "아츠카");
    }

    #[test]
    fn test_markers_are_separators() {
        let lang = macedonian();
        assert!(!lang.chars().contains(&','));
        assert!(!lang.chars().contains(&';'));
        assert_eq!(lang.split("скопје,охрид"), vec!["скопје", "охрид"]);
    }
}
