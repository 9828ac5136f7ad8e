#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Boolean(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Boolean(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression with a From conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonMap, Value};

    #[test]
    fn test_json_macro_primitives() {
        assert_eq!(json!(null), Value::Null);
        assert_eq!(json!(true), Value::Boolean(true));
        assert_eq!(json!(false), Value::Boolean(false));
        assert_eq!(json!(42), Value::Number(42.0));
        assert_eq!(json!(3.5), Value::Number(3.5));
        assert_eq!(json!("hello"), Value::string("hello"));
    }

    #[test]
    fn test_json_macro_arrays() {
        assert_eq!(json!([]), Value::Array(vec![]));

        let arr = json!([1, 2, 3]);
        match arr {
            Value::Array(elements) => {
                assert_eq!(elements.len(), 3);
                assert_eq!(elements[0], Value::Number(1.0));
                assert_eq!(elements[1], Value::Number(2.0));
                assert_eq!(elements[2], Value::Number(3.0));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_json_macro_objects() {
        assert_eq!(json!({}), Value::Object(JsonMap::new()));

        let obj = json!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::string("Alice")));
                assert_eq!(map.get("age"), Some(&Value::Number(30.0)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_json_macro_nesting_renders_canonically() {
        let value = json!({
            "a": 1,
            "b": [true, null, "x"]
        });
        assert_eq!(value.to_string(), "{\"a\":1,\"b\":[true,null,\"x\"]}");
    }
}
