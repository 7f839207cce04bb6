//! Request / response bodies for the JSON API.

pub mod movies;
