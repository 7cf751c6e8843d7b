use web_sys::Document;

pub const YEAR_ELEMENT_ID: &str = "year";

/// Put the current year into `#year`.
pub fn stamp(document: &Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ELEMENT_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
