use std::fmt;
use serde::{Deserialize, Serialize};

/// One contact record. The identifier is opaque and originates from the
/// external source; the favorite flag is not intrinsic to the record, it
/// is derived by joining against the favorite-id set at read time and is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id")]
    id          : String,

    #[serde(rename = "name")]
    #[serde(default)]
    name        : String,

    #[serde(rename = "phoneNumber")]
    #[serde(default)]
    phone_number: String,

    #[serde(rename = "photoUri")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    photo_uri   : Option<String>,

    #[serde(skip)]
    favorite    : bool,
}

pub struct ContactBuilder {
    id          : String,
    name        : Option<String>,
    phone_number: Option<String>,
    photo_uri   : Option<String>,
}

impl ContactBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id          : id.to_string(),
            name        : None,
            phone_number: None,
            photo_uri   : None,
        }
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_phone_number(&mut self, phone_number: &str) -> &mut Self {
        self.phone_number = Some(phone_number.to_string());
        self
    }

    pub fn with_photo_uri(&mut self, photo_uri: &str) -> &mut Self {
        self.photo_uri = Some(photo_uri.to_string());
        self
    }

    pub fn build(&self) -> Contact {
        Contact {
            id          : self.id.clone(),
            name        : self.name.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
            photo_uri   : self.photo_uri.clone(),
            favorite    : false,
        }
    }
}

impl Contact {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn photo_uri(&self) -> Option<&str> {
        self.photo_uri.as_deref()
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub(crate) fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]:{}", self.name, self.id, self.phone_number)?;
        Ok(())
    }
}
