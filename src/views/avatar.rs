/// Expand an avatar URL template, replacing `{id}` with the url-encoded
/// player id.
pub fn avatar_url(template: &str, player_id: &str) -> String {
    template.replace("{id}", &urlencoding::encode(player_id))
}

pub fn avatar_url_opt(template: Option<&str>, player_id: &str) -> Option<String> {
    template.map(|t| avatar_url(t, player_id))
}
