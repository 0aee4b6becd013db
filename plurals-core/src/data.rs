//! Built-in CLDR plural rule tables.
//!
//! Rule text follows CLDR 44 `plurals.xml` and `ordinals.xml`. The `other`
//! category is implicit and never listed. A group with no rules is still
//! "known": those languages have no plural distinction at all.

use crate::PluralCategory::{self, Few, Many, One, Two, Zero};

/// Locales sharing one set of rules.
#[derive(Debug)]
pub(crate) struct RuleGroup {
    pub locales: &'static [&'static str],
    pub rules: &'static [(PluralCategory, &'static str)],
}

const ROMANCE_MILLIONS: &str = "e = 0 and i != 0 and i % 1000000 = 0 and v = 0 or e != 0..5";

pub(crate) static CARDINAL: &[RuleGroup] = &[
    RuleGroup {
        locales: &[
            "bm", "bo", "dz", "hnj", "id", "ig", "ii", "ja", "jbo", "jv", "kde", "kea", "km", "ko",
            "lkt", "lo", "ms", "my", "nqo", "osa", "root", "sah", "ses", "sg", "su", "th", "to",
            "tpi", "vi", "wo", "yo", "yue", "zh",
        ],
        rules: &[],
    },
    RuleGroup {
        locales: &["am", "as", "bn", "doi", "fa", "gu", "hi", "kn", "pcm", "zu"],
        rules: &[(One, "i = 0 or n = 1")],
    },
    RuleGroup {
        locales: &["ff", "hy", "kab"],
        rules: &[(One, "i = 0,1")],
    },
    RuleGroup {
        locales: &[
            "ast", "de", "en", "et", "fi", "fy", "gl", "ia", "io", "lij", "nl", "sc", "sv", "sw",
            "ur", "yi",
        ],
        rules: &[(One, "i = 1 and v = 0")],
    },
    RuleGroup {
        locales: &["si"],
        rules: &[(One, "n = 0,1 or i = 0 and f = 1")],
    },
    RuleGroup {
        locales: &["ak", "bho", "csw", "guw", "ln", "mg", "nso", "pa", "ti", "wa"],
        rules: &[(One, "n = 0..1")],
    },
    RuleGroup {
        locales: &["tzm"],
        rules: &[(One, "n = 0..1 or n = 11..99")],
    },
    RuleGroup {
        locales: &[
            "af", "an", "asa", "az", "bal", "bem", "bez", "bg", "brx", "ce", "cgg", "chr", "ckb",
            "dv", "ee", "el", "eo", "eu", "fo", "fur", "gsw", "ha", "haw", "hu", "jgo", "jmc",
            "ka", "kaj", "kcg", "kk", "kkj", "kl", "ks", "ksb", "ku", "ky", "lb", "lg", "mas",
            "mgo", "ml", "mn", "mr", "nah", "nb", "nd", "ne", "nn", "nnh", "no", "nr", "ny", "nyn",
            "om", "or", "os", "pap", "ps", "rm", "rof", "rwk", "saq", "sd", "sdh", "seh", "sn",
            "so", "sq", "ss", "ssy", "st", "syr", "ta", "te", "teo", "tig", "tk", "tn", "tr", "ts",
            "ug", "uz", "ve", "vo", "vun", "wae", "xh", "xog",
        ],
        rules: &[(One, "n = 1")],
    },
    RuleGroup {
        locales: &["da"],
        rules: &[(One, "n = 1 or t != 0 and i = 0,1")],
    },
    RuleGroup {
        locales: &["is"],
        rules: &[(One, "t = 0 and i % 10 = 1 and i % 100 != 11 or t % 10 = 1 and t % 100 != 11")],
    },
    RuleGroup {
        locales: &["mk"],
        rules: &[(One, "v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11")],
    },
    RuleGroup {
        locales: &["ceb", "fil", "tl"],
        rules: &[(
            One,
            "v = 0 and i = 1,2,3 or v = 0 and i % 10 != 4,6,9 or v != 0 and f % 10 != 4,6,9",
        )],
    },
    RuleGroup {
        locales: &["lv", "prg"],
        rules: &[
            (Zero, "n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19"),
            (
                One,
                "n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11 or v != 2 and f % 10 = 1",
            ),
        ],
    },
    RuleGroup {
        locales: &["lag"],
        rules: &[(Zero, "n = 0"), (One, "i = 0,1 and n != 0")],
    },
    RuleGroup {
        locales: &["ksh"],
        rules: &[(Zero, "n = 0"), (One, "n = 1")],
    },
    RuleGroup {
        locales: &["he"],
        rules: &[(One, "i = 1 and v = 0 or i = 0 and v != 0"), (Two, "i = 2 and v = 0")],
    },
    RuleGroup {
        locales: &["iu", "naq", "sat", "se", "sma", "smi", "smj", "smn", "sms"],
        rules: &[(One, "n = 1"), (Two, "n = 2")],
    },
    RuleGroup {
        locales: &["shi"],
        rules: &[(One, "i = 0 or n = 1"), (Few, "n = 2..10")],
    },
    RuleGroup {
        locales: &["mo", "ro"],
        rules: &[
            (One, "i = 1 and v = 0"),
            (Few, "v != 0 or n = 0 or n != 1 and n % 100 = 1..19"),
        ],
    },
    RuleGroup {
        locales: &["bs", "hr", "sh", "sr"],
        rules: &[
            (One, "v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11"),
            (
                Few,
                "v = 0 and i % 10 = 2..4 and i % 100 != 12..14 or f % 10 = 2..4 and f % 100 != 12..14",
            ),
        ],
    },
    RuleGroup {
        locales: &["fr"],
        rules: &[(One, "i = 0,1"), (Many, ROMANCE_MILLIONS)],
    },
    RuleGroup {
        locales: &["pt"],
        rules: &[(One, "i = 0..1"), (Many, ROMANCE_MILLIONS)],
    },
    RuleGroup {
        locales: &["ca", "it", "lld", "pt_PT", "scn", "vec"],
        rules: &[(One, "i = 1 and v = 0"), (Many, ROMANCE_MILLIONS)],
    },
    RuleGroup {
        locales: &["es"],
        rules: &[(One, "n = 1"), (Many, ROMANCE_MILLIONS)],
    },
    RuleGroup {
        locales: &["gd"],
        rules: &[(One, "n = 1,11"), (Two, "n = 2,12"), (Few, "n = 3..10,13..19")],
    },
    RuleGroup {
        locales: &["sl"],
        rules: &[
            (One, "v = 0 and i % 100 = 1"),
            (Two, "v = 0 and i % 100 = 2"),
            (Few, "v = 0 and i % 100 = 3..4 or v != 0"),
        ],
    },
    RuleGroup {
        locales: &["dsb", "hsb"],
        rules: &[
            (One, "v = 0 and i % 100 = 1 or f % 100 = 1"),
            (Two, "v = 0 and i % 100 = 2 or f % 100 = 2"),
            (Few, "v = 0 and i % 100 = 3..4 or f % 100 = 3..4"),
        ],
    },
    RuleGroup {
        locales: &["cs", "sk"],
        rules: &[
            (One, "i = 1 and v = 0"),
            (Few, "i = 2..4 and v = 0"),
            (Many, "v != 0"),
        ],
    },
    RuleGroup {
        locales: &["pl"],
        rules: &[
            (One, "i = 1 and v = 0"),
            (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
            (
                Many,
                "v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 12..14",
            ),
        ],
    },
    RuleGroup {
        locales: &["be"],
        rules: &[
            (One, "n % 10 = 1 and n % 100 != 11"),
            (Few, "n % 10 = 2..4 and n % 100 != 12..14"),
            (Many, "n % 10 = 0 or n % 10 = 5..9 or n % 100 = 11..14"),
        ],
    },
    RuleGroup {
        locales: &["lt"],
        rules: &[
            (One, "n % 10 = 1 and n % 100 != 11..19"),
            (Few, "n % 10 = 2..9 and n % 100 != 11..19"),
            (Many, "f != 0"),
        ],
    },
    RuleGroup {
        locales: &["ru", "uk"],
        rules: &[
            (One, "v = 0 and i % 10 = 1 and i % 100 != 11"),
            (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
            (
                Many,
                "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14",
            ),
        ],
    },
    RuleGroup {
        locales: &["br"],
        rules: &[
            (One, "n % 10 = 1 and n % 100 != 11,71,91"),
            (Two, "n % 10 = 2 and n % 100 != 12,72,92"),
            (Few, "n % 10 = 3..4,9 and n % 100 != 10..19,70..79,90..99"),
            (Many, "n != 0 and n % 1000000 = 0"),
        ],
    },
    RuleGroup {
        locales: &["mt"],
        rules: &[
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n = 0 or n % 100 = 3..10"),
            (Many, "n % 100 = 11..19"),
        ],
    },
    RuleGroup {
        locales: &["ga"],
        rules: &[
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n = 3..6"),
            (Many, "n = 7..10"),
        ],
    },
    RuleGroup {
        locales: &["gv"],
        rules: &[
            (One, "v = 0 and i % 10 = 1"),
            (Two, "v = 0 and i % 10 = 2"),
            (Few, "v = 0 and i % 100 = 0,20,40,60,80"),
            (Many, "v != 0"),
        ],
    },
    RuleGroup {
        locales: &["kw"],
        rules: &[
            (Zero, "n = 0"),
            (One, "n = 1"),
            (
                Two,
                "n % 100 = 2,22,42,62,82 or n % 1000 = 0 and n % 100000 = 1000..20000,40000,60000,80000 or n != 0 and n % 1000000 = 100000",
            ),
            (Few, "n % 100 = 3,23,43,63,83"),
            (Many, "n != 1 and n % 100 = 1,21,41,61,81"),
        ],
    },
    RuleGroup {
        locales: &["ar", "ars"],
        rules: &[
            (Zero, "n = 0"),
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n % 100 = 3..10"),
            (Many, "n % 100 = 11..99"),
        ],
    },
    RuleGroup {
        locales: &["cy"],
        rules: &[
            (Zero, "n = 0"),
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n = 3"),
            (Many, "n = 6"),
        ],
    },
];

pub(crate) static ORDINAL: &[RuleGroup] = &[
    RuleGroup {
        locales: &[
            "af", "am", "an", "ar", "bg", "bs", "ce", "cs", "da", "de", "dsb", "el", "es", "et",
            "eu", "fa", "fi", "fy", "gl", "gsw", "he", "hr", "hsb", "ia", "id", "is", "ja", "km",
            "kn", "ko", "ky", "lt", "lv", "ml", "mn", "my", "nb", "nl", "no", "pa", "pl", "prg",
            "ps", "pt", "root", "ru", "sd", "sh", "si", "sk", "sl", "sr", "sw", "ta", "te", "th",
            "tpi", "tr", "ur", "uz", "yue", "zh", "zu",
        ],
        rules: &[],
    },
    RuleGroup {
        locales: &["bal", "fil", "fr", "ga", "hy", "lo", "mo", "ms", "ro", "tl", "vi"],
        rules: &[(One, "n = 1")],
    },
    RuleGroup {
        locales: &["hu"],
        rules: &[(One, "n = 1,5")],
    },
    RuleGroup {
        locales: &["ne"],
        rules: &[(One, "n = 1..4")],
    },
    RuleGroup {
        locales: &["be"],
        rules: &[(Few, "n % 10 = 2,3 and n % 100 != 12,13")],
    },
    RuleGroup {
        locales: &["uk"],
        rules: &[(Few, "n % 10 = 3 and n % 100 != 13")],
    },
    RuleGroup {
        locales: &["tk"],
        rules: &[(Few, "n % 10 = 6,9 or n = 10")],
    },
    RuleGroup {
        locales: &["kk"],
        rules: &[(Many, "n % 10 = 6 or n % 10 = 9 or n % 10 = 0 and n != 0")],
    },
    RuleGroup {
        locales: &["it", "sc", "scn", "vec"],
        rules: &[(Many, "n = 11,8,80,800")],
    },
    RuleGroup {
        locales: &["lij"],
        rules: &[(Many, "n = 11,8,80..89,800..899")],
    },
    RuleGroup {
        locales: &["ka"],
        rules: &[(One, "i = 1"), (Many, "i = 0 or i % 100 = 2..20,40,60,80")],
    },
    RuleGroup {
        locales: &["sq"],
        rules: &[(One, "n = 1"), (Many, "n % 10 = 4 and n % 100 != 14")],
    },
    RuleGroup {
        locales: &["kw"],
        rules: &[
            (One, "n = 1..4 or n % 100 = 1..4,21..24,41..44,61..64,81..84"),
            (Many, "n = 5 or n % 100 = 5"),
        ],
    },
    RuleGroup {
        locales: &["sv"],
        rules: &[(One, "n % 10 = 1,2 and n % 100 != 11,12")],
    },
    RuleGroup {
        locales: &["en"],
        rules: &[
            (One, "n % 10 = 1 and n % 100 != 11"),
            (Two, "n % 10 = 2 and n % 100 != 12"),
            (Few, "n % 10 = 3 and n % 100 != 13"),
        ],
    },
    RuleGroup {
        locales: &["mr"],
        rules: &[(One, "n = 1"), (Two, "n = 2,3"), (Few, "n = 4")],
    },
    RuleGroup {
        locales: &["gd"],
        rules: &[(One, "n = 1,11"), (Two, "n = 2,12"), (Few, "n = 3,13")],
    },
    RuleGroup {
        locales: &["ca"],
        rules: &[(One, "n = 1,3"), (Two, "n = 2"), (Few, "n = 4")],
    },
    RuleGroup {
        locales: &["mk"],
        rules: &[
            (One, "i % 10 = 1 and i % 100 != 11"),
            (Two, "i % 10 = 2 and i % 100 != 12"),
            (Many, "i % 10 = 7,8 and i % 100 != 17,18"),
        ],
    },
    RuleGroup {
        locales: &["az"],
        rules: &[
            (One, "i % 10 = 1,2,5,7,8 or i % 100 = 20,50,70,80"),
            (Few, "i % 10 = 3,4 or i % 1000 = 100,200,300,400,500,600,700,800,900"),
            (Many, "i = 0 or i % 10 = 6 or i % 100 = 40,60,90"),
        ],
    },
    RuleGroup {
        locales: &["gu", "hi"],
        rules: &[(One, "n = 1"), (Two, "n = 2,3"), (Few, "n = 4"), (Many, "n = 6")],
    },
    RuleGroup {
        locales: &["as", "bn"],
        rules: &[
            (One, "n = 1,5,7,8,9,10"),
            (Two, "n = 2,3"),
            (Few, "n = 4"),
            (Many, "n = 6"),
        ],
    },
    RuleGroup {
        locales: &["or"],
        rules: &[
            (One, "n = 1,5,7..9"),
            (Two, "n = 2,3"),
            (Few, "n = 4"),
            (Many, "n = 6"),
        ],
    },
    RuleGroup {
        locales: &["cy"],
        rules: &[
            (Zero, "n = 0,7,8,9"),
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n = 3,4"),
            (Many, "n = 5,6"),
        ],
    },
];
