/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become records (fields in the order written), arrays become
/// sequences, `null` becomes an unsupported value, and any other expression is
/// reflected through [`to_value`](crate::to_value).
///
/// ```rust
/// use serde_rowtext::{record, to_string_value};
///
/// let value = record!({ "id": 1, "tags": ["a", "b"], "owner": { "name": "Ann" } });
/// assert_eq!(to_string_value(&value), "id, tags, owner\n1, \"a | b\"\nname\nAnn");
///
/// let offsets = record!({ "dx": -1, "dy": 2 * 3 });
/// assert_eq!(to_string_value(&offsets), "dx, dy\n-1, 6");
/// ```
#[macro_export]
macro_rules! record {
    (@fields $record:ident;) => {};

    (@fields $record:ident; $key:literal : $value:tt , $($rest:tt)*) => {
        $record.insert($key, $crate::record!($value));
        $crate::record!(@fields $record; $($rest)*);
    };

    (@fields $record:ident; $key:literal : $value:tt) => {
        $record.insert($key, $crate::record!($value));
    };

    (@fields $record:ident; $key:literal : $value:expr , $($rest:tt)*) => {
        $record.insert($key, $crate::record!($value));
        $crate::record!(@fields $record; $($rest)*);
    };

    (@fields $record:ident; $key:literal : $value:expr) => {
        $record.insert($key, $crate::record!($value));
    };

    (@elems $items:ident;) => {};

    (@elems $items:ident; $elem:tt , $($rest:tt)*) => {
        $items.push($crate::record!($elem));
        $crate::record!(@elems $items; $($rest)*);
    };

    (@elems $items:ident; $elem:tt) => {
        $items.push($crate::record!($elem));
    };

    (@elems $items:ident; $elem:expr , $($rest:tt)*) => {
        $items.push($crate::record!($elem));
        $crate::record!(@elems $items; $($rest)*);
    };

    (@elems $items:ident; $elem:expr) => {
        $items.push($crate::record!($elem));
    };

    (null) => {
        $crate::Value::Unsupported("null")
    };

    (true) => {
        $crate::Value::Boolean(true)
    };

    (false) => {
        $crate::Value::Boolean(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($body:tt)+ ]) => {{
        let mut items = ::std::vec::Vec::new();
        $crate::record!(@elems items; $($body)+);
        $crate::Value::Sequence(items)
    }};

    ({}) => {
        $crate::Value::Record($crate::Record::new())
    };

    ({ $($body:tt)+ }) => {{
        let mut record = $crate::Record::new();
        $crate::record!(@fields record; $($body)+);
        $crate::Value::Record(record)
    }};

    ($e:expr) => {
        $crate::to_value(&$e).unwrap_or($crate::Value::Unsupported("unreflectable"))
    };
}
