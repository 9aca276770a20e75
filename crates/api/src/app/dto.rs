use serde::{Deserialize, Serialize};

use potluck_core::PartyNumber;
use potluck_parties::{FoodList, Party};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /parties`. A missing or `null` guest list is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePartyRequest {
    #[serde(default)]
    pub guests: Option<Vec<String>>,
}

impl CreatePartyRequest {
    pub fn into_guests(self) -> Vec<String> {
        self.guests.unwrap_or_default()
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct PartyCreated {
    pub party_number: PartyNumber,
}

#[derive(Debug, Serialize)]
pub struct LoadedParties {
    pub loaded_parties: Vec<Party>,
}

#[derive(Debug, Serialize)]
pub struct LoadedCount {
    pub loaded_parties: usize,
}

#[derive(Debug, Serialize)]
pub struct FoodListResponse {
    pub foodlist: FoodList,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub msg: String,
}
