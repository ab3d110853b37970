//! Diesel table definitions. Keep in step with `backend/migrations`.

diesel::table! {
    users (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        age -> Int4,
        gender -> Text,
        height -> Nullable<Float8>,
        weight -> Nullable<Float8>,
        activity_level -> Nullable<Text>,
        diseases -> Array<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    health_logs (id) {
        id -> Uuid,
        user_id -> Uuid,
        date -> Date,
        weight -> Float8,
        water_intake -> Float8,
        calories -> Float8,
        sleep -> Float8,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, health_logs);
