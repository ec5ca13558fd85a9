pub mod game_set;
pub mod validated_json;
