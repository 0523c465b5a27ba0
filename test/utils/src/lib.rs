/// Game names as the search endpoint would return them for "hal".
pub fn search_results_fixture() -> Vec<String> {
    return vec![
        "Half-Life".to_string(),
        "Half-Life 2".to_string(),
        "Halo: Combat Evolved".to_string(),
        "Halo 3".to_string(),
    ];
}

pub fn game_details_fixture() -> &'static str {
    return r#"
{
  "platforms": {
    "windows": true,
    "mac": false,
    "linux": true,
    "ps4": false,
    "ps5": false,
    "xbox": true
  }
}
"#
    .trim();
}
