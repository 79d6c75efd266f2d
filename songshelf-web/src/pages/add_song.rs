//! AddSong page handlers - form and submission

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use songshelf_common::Song;

use super::layout::{escape_html, render_page};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddSongForm {
    pub song_name: String,
    pub singer_name: String,
    pub release_year: String,
}

/// GET /add-song
pub async fn add_song_form() -> Response {
    render_page("Add Song", &render_form(None, "", "", "")).into_response()
}

/// POST /add-song
///
/// An unparseable form is rejected with 400. On success the browser is
/// redirected to the Index; on failure the form re-renders with the
/// submitted values and a banner.
pub async fn add_song_submit(
    State(state): State<AppState>,
    form: Option<Form<AddSongForm>>,
) -> Response {
    let Some(Form(form)) = form else {
        return (StatusCode::BAD_REQUEST, "Invalid Song data").into_response();
    };

    let song = Song::new(&form.song_name, &form.singer_name, &form.release_year);

    if state.songs.add_song(&song).await {
        return Redirect::to("/").into_response();
    }

    render_page(
        "Add Song",
        &render_form(
            Some("Failed to add the song. Please try again."),
            &form.song_name,
            &form.singer_name,
            &form.release_year,
        ),
    )
    .into_response()
}

fn render_form(banner: Option<&str>, song_name: &str, singer_name: &str, release_year: &str) -> String {
    let banner_html = match banner {
        Some(message) => format!(r#"<div class="banner">{}</div>"#, escape_html(message)),
        None => String::new(),
    };

    format!(
        r#"<h2>Add Song</h2>
{banner_html}
<form method="post" action="/add-song">
    <label for="song_name">Song Name</label>
    <input type="text" id="song_name" name="song_name" value="{}" required>
    <label for="singer_name">Singer Name</label>
    <input type="text" id="singer_name" name="singer_name" value="{}" required>
    <label for="release_year">Release Year</label>
    <input type="text" id="release_year" name="release_year" value="{}">
    <button class="button" type="submit">Add</button>
</form>"#,
        escape_html(song_name),
        escape_html(singer_name),
        escape_html(release_year),
    )
}
