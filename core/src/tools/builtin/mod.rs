//! Built-in travel tools

pub mod book_hotel;
pub mod convert_currency;
pub mod get_weather;

pub use book_hotel::{BookHotelTool, BookHotelToolFactory};
pub use convert_currency::{ConvertCurrencyTool, ConvertCurrencyToolFactory};
pub use get_weather::{GetWeatherTool, GetWeatherToolFactory};
