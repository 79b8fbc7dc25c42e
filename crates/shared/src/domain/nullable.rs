use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that distinguishes "not supplied" from an explicit `null`.
///
/// Use with `#[serde(default)]` so a missing key decodes as [`Nullable::Absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nullable<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Absent | Nullable::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Absent | Nullable::Null => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Nullable::Value(_))
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Value(v) => serializer.serialize_some(v),
            Nullable::Absent | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Payload {
        #[serde(default)]
        parent_id: Nullable<i64>,
    }

    #[test]
    fn keeps_three_states_apart() {
        let absent: Payload = serde_json::from_str("{}").unwrap();
        let null: Payload = serde_json::from_str(r#"{"parent_id": null}"#).unwrap();
        let value: Payload = serde_json::from_str(r#"{"parent_id": 7}"#).unwrap();

        assert_eq!(absent.parent_id, Nullable::Absent);
        assert_eq!(null.parent_id, Nullable::Null);
        assert_eq!(value.parent_id, Nullable::Value(7));
    }

    #[test]
    fn serializes_missing_values_as_null() {
        let json = serde_json::to_string(&Payload {
            parent_id: Nullable::Absent,
        })
        .unwrap();
        assert_eq!(json, r#"{"parent_id":null}"#);

        let json = serde_json::to_string(&Payload {
            parent_id: Nullable::Value(3),
        })
        .unwrap();
        assert_eq!(json, r#"{"parent_id":3}"#);
    }

    #[test]
    fn option_round_trip() {
        assert_eq!(Nullable::from(Some(1)).into_option(), Some(1));
        assert_eq!(Nullable::<i64>::from(None), Nullable::Null);
        assert_eq!(Nullable::<i64>::Absent.as_option(), None);
    }
}
