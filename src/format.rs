use js_sys::{Array, Date, Function, Intl, Object, Reflect};
use wasm_bindgen::JsValue;

const US_LOCALE: &str = "en-US";

fn options(pairs: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in pairs {
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object
}

fn locales(locale: Option<&str>) -> Array {
    let list = Array::new();
    if let Some(locale) = locale {
        list.push(&JsValue::from_str(locale));
    }
    list
}

fn apply(format: Function, value: &JsValue) -> String {
    format
        .call1(&JsValue::UNDEFINED, value)
        .ok()
        .and_then(|formatted| formatted.as_string())
        .unwrap_or_default()
}

/// Grouped number in the browser's default locale.
pub fn format_number(value: f64) -> String {
    let format = Intl::NumberFormat::new(&locales(None), &Object::new());
    apply(format.format(), &JsValue::from_f64(value))
}

/// `0.1234` → `12.3%`.
pub fn format_percentage(value: f64) -> String {
    let format = Intl::NumberFormat::new(
        &locales(Some(US_LOCALE)),
        &options(&[
            ("style", JsValue::from_str("percent")),
            ("minimumFractionDigits", JsValue::from_f64(1.0)),
            ("maximumFractionDigits", JsValue::from_f64(1.0)),
        ]),
    );
    apply(format.format(), &JsValue::from_f64(value))
}

/// Unix seconds rendered like `Jun 15, 2024, 02:30 PM` in local time.
pub fn format_date(epoch_seconds: f64) -> String {
    let format = Intl::DateTimeFormat::new(
        &locales(Some(US_LOCALE)),
        &options(&[
            ("year", JsValue::from_str("numeric")),
            ("month", JsValue::from_str("short")),
            ("day", JsValue::from_str("numeric")),
            ("hour", JsValue::from_str("2-digit")),
            ("minute", JsValue::from_str("2-digit")),
        ]),
    );
    let date = Date::new(&JsValue::from_f64(epoch_seconds * 1000.0));
    apply(format.format(), &date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn percentage_keeps_one_decimal() {
        assert_eq!(format_percentage(0.1234), "12.3%");
        assert_eq!(format_percentage(-0.05), "-5.0%");
        assert_eq!(format_percentage(1.0), "100.0%");
    }

    #[wasm_bindgen_test]
    fn number_is_grouped() {
        let formatted = format_number(1234567.0);
        assert!(formatted.len() > "1234567".len(), "{formatted}");
        assert!(formatted.starts_with('1') && formatted.ends_with('7'));
    }

    #[wasm_bindgen_test]
    fn date_uses_seconds() {
        // 2024-06-15T12:00:00Z is Jun 15 or 16 in every time zone.
        let formatted = format_date(1_718_452_800.0);
        assert!(formatted.contains("Jun"), "{formatted}");
        assert!(formatted.contains("2024"), "{formatted}");
    }
}
