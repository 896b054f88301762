diesel::table! {
    aircrafts (registration) {
        registration -> Text,
        model -> Text,
        capacity -> Integer,
    }
}

diesel::table! {
    passengers (passport) {
        passport -> Text,
        name -> Text,
        surname -> Text,
        patronymic -> Text,
        date_of_birth -> Text,
    }
}

diesel::table! {
    flights (flight_number) {
        flight_number -> Text,
        departure -> Text,
        destination -> Text,
        departure_time -> Text,
        aircraft_registration -> Text,
        duration_minutes -> Integer,
        is_cancelled -> Integer,
    }
}

diesel::table! {
    bookings (id) {
        id -> Integer,
        flight_number -> Text,
        passenger_passport -> Text,
        booking_time -> Text,
    }
}

diesel::joinable!(flights -> aircrafts (aircraft_registration));
diesel::joinable!(bookings -> flights (flight_number));
diesel::joinable!(bookings -> passengers (passenger_passport));

diesel::allow_tables_to_appear_in_same_query!(aircrafts, passengers, flights, bookings);
