use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const ERROR_INVALID_VALUE: &str = "error.invalid_value";
    pub const ERROR_INVALID_UNIT: &str = "error.invalid_unit";
    pub const ERROR_INVALID_OPERAND: &str = "error.invalid_operand";
    pub const ERROR_CATEGORY_MISMATCH: &str = "error.category_mismatch";
    pub const ERROR_UNSUPPORTED_OPERATION: &str = "error.unsupported_operation";
    pub const ERROR_DIVISION_BY_ZERO: &str = "error.division_by_zero";
    pub const ERROR_CONFIG: &str = "error.config";
    pub const ERROR_IO: &str = "error.io";

    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNITS_BASE_MARK: &str = "units.base_mark";
    pub const CONFIG_WRITTEN: &str = "config.written";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 현재 언어 → 한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 형태의 자리표시자를 치환한 번역을 돌려준다.
    pub fn tf(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.t(key).to_string();
        for (k, v) in args {
            out = out.replace(&format!("{{{k}}}"), v);
        }
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|loc| normalize_locale_string(&loc))
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let src = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&src)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        ERROR_INVALID_VALUE => "값은 유한한 숫자여야 합니다.",
        ERROR_INVALID_UNIT => "단위가 없거나 알 수 없는 단위입니다.",
        ERROR_INVALID_OPERAND => "피연산자가 지정되지 않았습니다.",
        ERROR_CATEGORY_MISMATCH => "단위 계열이 다릅니다: {expected} / {found}",
        ERROR_UNSUPPORTED_OPERATION => "{family} 단위에서는 지원하지 않는 연산입니다.",
        ERROR_DIVISION_BY_ZERO => "0으로 나눌 수 없습니다.",
        ERROR_CONFIG => "설정 오류: {detail}",
        ERROR_IO => "입출력 오류: {detail}",
        UNITS_HEADING => "지원 단위",
        UNITS_BASE_MARK => "(기준)",
        CONFIG_WRITTEN => "설정 파일을 저장했습니다: {path}",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        ERROR_INVALID_VALUE => "Value must be a finite number.",
        ERROR_INVALID_UNIT => "Unit is missing or unknown.",
        ERROR_INVALID_OPERAND => "Operand cannot be empty.",
        ERROR_CATEGORY_MISMATCH => "Unit families differ: {expected} / {found}",
        ERROR_UNSUPPORTED_OPERATION => "Operation is not supported for {family} units.",
        ERROR_DIVISION_BY_ZERO => "Cannot divide by zero.",
        ERROR_CONFIG => "Config error: {detail}",
        ERROR_IO => "I/O error: {detail}",
        UNITS_HEADING => "Supported units",
        UNITS_BASE_MARK => "(base)",
        CONFIG_WRITTEN => "Config written to {path}",
        _ => return None,
    };
    Some(s)
}
