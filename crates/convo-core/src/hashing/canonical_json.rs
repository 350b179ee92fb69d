//! Canonical JSON minimal: claves de objeto ordenadas, sin espacios.
//! Suficiente para identidad de definiciones; no pretende cubrir números edge.

use serde_json::Value;

pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&escape(s)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, k) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&escape(k));
                out.push(':');
                write_canonical(&map[k], out);
            }
            out.push('}');
        }
    }
}

fn escape(s: &str) -> String {
    // serde_json ya produce el escapado JSON correcto para strings sueltos.
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_keys_are_sorted() {
        let v = json!({"b": 1, "a": [true, null]});
        assert_eq!(to_canonical_json(&v), r#"{"a":[true,null],"b":1}"#);
    }

    #[test]
    fn key_order_does_not_change_output() {
        let left = serde_json::from_str::<Value>(r#"{"x":1,"y":2}"#).expect("json");
        let right = serde_json::from_str::<Value>(r#"{"y":2,"x":1}"#).expect("json");
        assert_eq!(to_canonical_json(&left), to_canonical_json(&right));
    }
}
