//! Diesel table definitions for the workshop schema.
//!
//! Keep in sync with `backend/migrations`. Column names follow the shop's
//! existing database.

diesel::table! {
    /// Clients, keyed in practice by `nazwa`.
    klienci (id) {
        id -> Int8,
        nazwa -> Text,
    }
}

diesel::table! {
    /// Machines, keyed in practice by (`klient_id`, `numer_seryjny`).
    maszyny (id) {
        id -> Int8,
        klient_id -> Int8,
        marka -> Nullable<Text>,
        klasa -> Nullable<Text>,
        numer_seryjny -> Text,
    }
}

diesel::table! {
    /// Repair tickets.
    naprawy (id) {
        id -> Int8,
        maszyna_id -> Int8,
        data_przyjecia -> Date,
        data_zakonczenia -> Nullable<Date>,
        status -> Text,
        usterka -> Nullable<Text>,
        opis -> Nullable<Text>,
    }
}

diesel::joinable!(maszyny -> klienci (klient_id));
diesel::joinable!(naprawy -> maszyny (maszyna_id));

diesel::allow_tables_to_appear_in_same_query!(klienci, maszyny, naprawy);
