// Start of file: src/utils/json.rs

use serde_json::{
    ser::PrettyFormatter, Serializer
};
use serde::Serialize;

/*
    * Convert any `Serialize` type into a two-space-indented JSON string.
*/
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut writer: Vec<u8> = Vec::new();

    let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"  ");

    let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
        Serializer::with_formatter(&mut writer, formatter);

    value.serialize(&mut ser)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&writer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indents_with_two_spaces() {
        let rendered: String = to_two_space_indented_json(&json!({ "code": 200 })).unwrap();

        assert_eq!(rendered, "{\n  \"code\": 200\n}");
    }
}

// End of file: src/utils/json.rs
