use crate::lang::{Direction, LanguagePack, PackError};

use paste::paste;
use phf::{Map, phf_map};

/// Compile-time description of a built-in pack.
///
/// `pairs` hold multi-character sequences, `chars` hold parallel strings that
/// pair up character by character. Pairs are declared first, so on an
/// equal-length tie in Reverse mode the digraph spelling wins.
#[derive(Debug, Clone, Copy)]
pub struct PackData {
    pub code: &'static str,
    pub name: &'static str,
    pub compose: bool,
    pub pairs: &'static [(&'static str, &'static str)],
    pub chars: &'static [(&'static str, &'static str)],
    pub pre_rules: &'static [(Direction, &'static str, &'static str)],
    pub reverse_overrides: &'static [(&'static str, &'static str)],
}

impl PackData {
    pub fn build(&self) -> Result<LanguagePack, PackError> {
        let mut builder = LanguagePack::builder(self.code, self.name).compose(self.compose);
        for &(latin, script) in self.pairs {
            builder = builder.pair(latin, script);
        }
        for &(latin, script) in self.chars {
            builder = builder.mapping(latin, script);
        }
        for &(direction, pattern, replacement) in self.pre_rules {
            builder = builder.pre_rule(direction, pattern, replacement);
        }
        for &(script, latin) in self.reverse_overrides {
            builder = builder.reverse_override(script, latin);
        }
        builder.build()
    }
}

/// ---------------------------------------------------------------------------
///    Macro – generates every built-in pack from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_packs {
    ($(
        $ident:ident, $code:literal, $name:literal,
        compose: $compose:expr,
        pairs: [ $($pl:literal => $ps:literal),* $(,)? ],
        chars: [ $(($cl:literal, $cs:literal)),* $(,)? ],
        pre: [ $($dir:ident: $pp:literal => $pr:literal),* $(,)? ],
        reverse: [ $($rs:literal => $rl:literal),* $(,)? ]
    );* $(;)?) => {
        // Per-pack static data modules
        $(
            paste! {
                mod [<$ident:lower _data>] {
                    use super::*;

                    pub const PACK: PackData = PackData {
                        code: $code,
                        name: $name,
                        compose: $compose,
                        pairs: &[$(($pl, $ps)),*],
                        chars: &[$(($cl, $cs)),*],
                        pre_rules: &[$((Direction::$dir, $pp, $pr)),*],
                        reverse_overrides: &[$(($rs, $rl)),*],
                    };
                }

                pub const $ident: &PackData = &[<$ident:lower _data>]::PACK;
            }
        )*

        /// Built-in packs in registration order.
        pub static BUILTIN_PACKS: &[&PackData] = &[$($ident),*];

        pub static PACK_TABLE: Map<&'static str, &'static PackData> = phf_map! {
            $($code => $ident),*
        };
    };
}

/// Built-in pack data by language code.
#[inline]
pub fn builtin(code: &str) -> Option<&'static PackData> {
    PACK_TABLE.get(code).copied()
}

// ---------------------------------------------------------------------------
//    Pack definitions (single source of truth)
//    Upper-case digraphs are title-cased ("Sh"), matching word-initial use.
//    The first declared match wins, so "ու" precedes its prefix "ո".
// ---------------------------------------------------------------------------
define_packs! {
    HY, "hy", "Armenian",
        compose: false,
        pairs: [
            "e'" => "է", "t'" => "թ", "jh" => "ժ", "ts" => "ծ", "dz" => "ձ",
            "gh" => "ղ", "tch" => "ճ", "sh" => "շ", "u" => "ու", "vo" => "ո",
            "ch" => "չ", "dj" => "ջ", "ph" => "փ", "y" => "ը",
            "E'" => "Է", "T'" => "Թ", "Jh" => "Ժ", "Ts" => "Ծ", "Dz" => "Ձ",
            "Gh" => "Ղ", "Tch" => "Ճ", "Sh" => "Շ", "U" => "Ու", "Vo" => "Ո",
            "Ch" => "Չ", "Dj" => "Ջ", "Ph" => "Փ", "Y" => "Ը",
        ],
        chars: [
            ("abgdezilxkhmjnpsvtrcq&of", "աբգդեզիլխկհմյնպսվտրցքևօֆ"),
            ("ABGDEZILXKHMJNPSVTRCQOF", "ԱԲԳԴԵԶԻԼԽԿՀՄՅՆՊՍՎՏՐՑՔՕՖ"),
        ],
        pre: [
            // Armenian presentation-form ligatures
            Reverse: "ﬓ" => "մն",
            Reverse: "ﬔ" => "մե",
            Reverse: "ﬕ" => "մի",
            Reverse: "ﬖ" => "վն",
            Reverse: "ﬗ" => "մխ",
        ],
        // ռ and ր both romanize as "r"; only ր is produced on encode.
        reverse: [ "ռ" => "r", "Ռ" => "R", "ՈՒ" => "U" ];

    KA, "ka", "Georgian",
        compose: false,
        pairs: [
            "ts'" => "წ", "ch'" => "ჭ", "t'" => "თ", "p'" => "ფ", "k'" => "ქ",
            "zh" => "ჟ", "gh" => "ღ", "sh" => "შ", "ch" => "ჩ", "ts" => "ც",
            "dz" => "ძ", "kh" => "ხ",
            "Ts'" => "წ", "Ch'" => "ჭ", "T'" => "თ", "P'" => "ფ", "K'" => "ქ",
            "Zh" => "ჟ", "Gh" => "ღ", "Sh" => "შ", "Ch" => "ჩ", "Ts" => "ც",
            "Dz" => "ძ", "Kh" => "ხ",
        ],
        // Mkhedruli is unicase: capitals encode to the same letters and
        // decode back to lower case.
        chars: [
            ("abgdevziklmnoprstuqjh", "აბგდევზიკლმნოპრსტუყჯჰ"),
            ("ABGDEVZIKLMNOPRSTUQJH", "აბგდევზიკლმნოპრსტუყჯჰ"),
        ],
        pre: [],
        reverse: [];

    RU, "ru", "Russian",
        compose: true,
        pairs: [
            "sch" => "щ", "zh" => "ж", "ts" => "ц", "ch" => "ч", "sh" => "ш",
            "ju" => "ю", "ja" => "я", "jo" => "ё", "e'" => "э", "''" => "ъ",
            "Sch" => "Щ", "Zh" => "Ж", "Ts" => "Ц", "Ch" => "Ч", "Sh" => "Ш",
            "Ju" => "Ю", "Ja" => "Я", "Jo" => "Ё", "E'" => "Э",
        ],
        chars: [
            ("abvgdezijklmnoprstufhcy'", "абвгдезийклмнопрстуфхцыь"),
            ("ABVGDEZIJKLMNOPRSTUFHCY", "АБВГДЕЗИЙКЛМНОПРСТУФХЦЫ"),
        ],
        pre: [
            Forward: "’" => "'",
        ],
        // Signs have no capital Latin spelling.
        reverse: [ "Ъ" => "''", "Ь" => "'" ];
}
