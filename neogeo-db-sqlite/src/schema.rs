///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    location (rowid) {
        rowid -> BigInt,
        id -> Text,
        // GeoJSON x coordinate
        lng -> Double,
        // GeoJSON y coordinate
        lat -> Double,
        enabled -> Bool,
    }
}

table! {
    location_address (parent_rowid, position) {
        parent_rowid -> BigInt,
        position -> Integer,
        address -> Text,
    }
}

joinable!(location_address -> location (parent_rowid));

table! {
    location_name (parent_rowid, position) {
        parent_rowid -> BigInt,
        position -> Integer,
        name -> Text,
    }
}

joinable!(location_name -> location (parent_rowid));

allow_tables_to_appear_in_same_query!(location, location_address, location_name);
