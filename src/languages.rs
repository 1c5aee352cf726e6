// Language codes the curation platform accepts for YouTube subtitle files.
const SUPPORTED_SUBTITLE_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "as", "az", "be", "bg", "bn", "bo", "bs", "ca", "cs", "cy", "da", "de",
    "el", "en", "en-gb", "en-us", "eo", "es", "es-419", "es-es", "et", "eu", "fa", "ff", "fi",
    "fil", "fr", "fr-ca", "ga", "gl", "gu", "ha", "he", "hi", "hr", "ht", "hu", "hy", "id", "ig",
    "is", "it", "ja", "jv", "ka", "kk", "km", "kn", "ko", "ku", "ky", "la", "lb", "lg", "ln",
    "lo", "lt", "lv", "mg", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "ne", "nl", "no",
    "ny", "om", "or", "pa", "pl", "ps", "pt", "pt-br", "pt-pt", "qu", "ro", "ru", "rw", "sd",
    "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "st", "su", "sv", "sw", "ta", "te", "tg",
    "th", "ti", "tk", "tl", "tn", "tr", "ts", "tt", "ug", "uk", "ur", "uz", "vi", "wo", "xh",
    "yi", "yo", "zh", "zh-hans", "zh-hant", "zh-cn", "zh-tw", "zu",
];

pub fn is_supported_subtitle_language(code: &str) -> bool {
    let normalized = code.trim().replace('_', "-").to_lowercase();
    !normalized.is_empty() && SUPPORTED_SUBTITLE_LANGUAGES.contains(&normalized.as_str())
}
