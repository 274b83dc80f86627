pub mod dto;
pub mod mappers;
pub mod open_food_facts;
