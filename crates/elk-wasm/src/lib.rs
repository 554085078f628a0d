//! WASM bindings for the Elk compiler.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen. Syntax errors are
//! returned as values, not thrown:
//!
//! ```text
//! { ok: true,  tree, html }
//! { ok: false, line, column, expected, message }
//! ```

use wasm_bindgen::prelude::*;

/// Compile Elk source to HTML.
///
/// Throws only if the result object cannot be built.
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<JsValue, JsError> {
    let js_obj = js_sys::Object::new();

    match elk_codegen::compile(source) {
        Ok(output) => {
            let tree = serde_wasm_bindgen::to_value(&output.document)
                .map_err(|e| JsError::new(&e.to_string()))?;
            set(&js_obj, "ok", true.into())?;
            set(&js_obj, "tree", tree)?;
            set(&js_obj, "html", output.html.into())?;
        }
        Err(e) => {
            let expected: js_sys::Array = e.expected.iter().map(JsValue::from).collect();
            set(&js_obj, "ok", false.into())?;
            set(&js_obj, "line", (e.line as u32).into())?;
            set(&js_obj, "column", (e.column as u32).into())?;
            set(&js_obj, "expected", expected.into())?;
            set(&js_obj, "message", e.to_string().into())?;
        }
    }

    Ok(js_obj.into())
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn set(obj: &js_sys::Object, key: &str, value: JsValue) -> Result<(), JsError> {
    js_sys::Reflect::set(obj, &key.into(), &value)
        .map(|_| ())
        .map_err(|_| JsError::new(&format!("Failed to set {key} property")))
}
