use serde::{Serialize, ser::SerializeStruct};
use store::{token::model::TokenInfo, utils};

// Tuple wrapper for TokenInfo
pub struct TokenResponse(pub TokenInfo);

impl Serialize for TokenResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let t = &self.0;
        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("address", &t.address)?;
        state.serialize_field("symbol", &t.symbol)?;
        state.serialize_field("decimals", &utils::decimals_for_multiplier(t.multiplier))?;
        state.serialize_field("multiplier", &t.multiplier.to_string())?;
        state.end()
    }
}
