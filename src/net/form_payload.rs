//! Ordered form-field payloads and their request encodings.

#[cfg(test)]
#[path = "form_payload_test.rs"]
mod form_payload_test;

/// Request body encoding used by a form adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEncoding {
    /// `application/x-www-form-urlencoded`.
    UrlEncoded,
    /// `multipart/form-data`; the browser chooses the boundary.
    Multipart,
}

impl FormEncoding {
    /// Explicit `Content-Type` to send, or `None` to let the browser set it.
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            Self::UrlEncoded => Some("application/x-www-form-urlencoded"),
            Self::Multipart => None,
        }
    }
}

/// Field name/value pairs in document order. Duplicate names are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Add a browser form entry whose value may not be text.
    ///
    /// File inputs have no string value; they are skipped with a warning and
    /// `false` is returned.
    pub fn push_entry(&mut self, name: String, value: Option<String>) -> bool {
        match value {
            Some(value) => {
                self.push(name, value);
                true
            }
            None => {
                log::warn!("form field {name} is not text; not submitted");
                false
            }
        }
    }

    /// Builder-style `push`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.iter() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};

    use super::FormPayload;

    impl FormPayload {
        /// Collect the fields of `form`; file inputs are skipped and logged.
        ///
        /// # Errors
        ///
        /// Returns the JS exception if the browser rejects the form element.
        pub fn from_form(form: &web_sys::HtmlFormElement) -> Result<Self, JsValue> {
            let data = web_sys::FormData::new_with_form(form)?;
            let mut payload = Self::new();
            let Some(entries) = js_sys::try_iter(&data)? else {
                return Ok(payload);
            };
            for entry in entries {
                let pair: js_sys::Array = entry?.dyn_into()?;
                let Some(name) = pair.get(0).as_string() else {
                    continue;
                };
                payload.push_entry(name, pair.get(1).as_string());
            }
            Ok(payload)
        }

        /// Build a browser `FormData` for a multipart request.
        ///
        /// # Errors
        ///
        /// Returns the JS exception if `FormData` construction fails.
        pub fn to_form_data(&self) -> Result<web_sys::FormData, JsValue> {
            let data = web_sys::FormData::new()?;
            for (name, value) in self.iter() {
                data.append_with_str(name, value)?;
            }
            Ok(data)
        }
    }
}
