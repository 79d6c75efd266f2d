//! Shared page shell and rendering helpers

use axum::response::Html;

/// Escape text for embedding in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap page content in the shared HTML shell
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = env!("GIT_HASH");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Songshelf</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 20px;
            margin-bottom: 30px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }}
        h1 {{
            font-size: 26px;
            color: #4a9eff;
        }}
        .build-info {{
            color: #888;
            font-size: 14px;
            font-family: 'Courier New', monospace;
        }}
        nav a {{
            color: #4a9eff;
            text-decoration: none;
            margin-right: 15px;
        }}
        .content {{
            padding: 0 20px 20px 20px;
        }}
        h2 {{
            color: #4a9eff;
            margin-top: 20px;
            margin-bottom: 10px;
        }}
        table {{
            border-collapse: collapse;
            margin: 15px 0;
            min-width: 600px;
        }}
        th, td {{
            border: 1px solid #3a3a3a;
            padding: 8px 14px;
            text-align: left;
        }}
        th {{
            background-color: #2a2a2a;
            color: #4a9eff;
        }}
        .empty {{
            color: #888;
            margin: 15px 0;
        }}
        .banner {{
            background: #ef4444;
            color: #fff;
            padding: 10px 15px;
            border-radius: 4px;
            margin: 15px 0;
            max-width: 600px;
        }}
        form label {{
            display: block;
            margin-top: 12px;
            color: #888;
        }}
        form input[type="text"], form input[type="number"] {{
            padding: 8px;
            width: 300px;
            background: #2a2a2a;
            border: 1px solid #3a3a3a;
            color: #e0e0e0;
            border-radius: 4px;
        }}
        .button {{
            display: inline-block;
            padding: 10px 20px;
            background: #4a9eff;
            color: white;
            text-decoration: none;
            border: none;
            border-radius: 4px;
            margin: 15px 5px 0 0;
            font-weight: 600;
            cursor: pointer;
        }}
        .button:hover {{
            background: #3a8eef;
        }}
        a.delete-link {{
            color: #ef4444;
            text-decoration: none;
        }}
    </style>
</head>
<body>
    <header>
        <h1>Songshelf</h1>
        <div class="build-info">v{version} [{git_hash}]</div>
    </header>
    <div class="content">
        <nav>
            <a href="/">Index</a>
            <a href="/search">Search</a>
            <a href="/add-song">Add Song</a>
        </nav>
        {content}
    </div>
</body>
</html>
"#,
    ))
}

/// Render a rows-of-songs table, shared by the Index and Search pages
pub fn render_song_table(songs: &[songshelf_common::Song], with_delete_links: bool) -> String {
    if songs.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for song in songs {
        let delete_cell = if with_delete_links {
            format!(
                r#"<td><a class="delete-link" href="/delete?id={}">Delete</a></td>"#,
                song.song_id
            )
        } else {
            String::new()
        };
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}</tr>\n",
            song.song_id,
            escape_html(&song.song_name),
            escape_html(&song.singer_name),
            escape_html(&song.release_year),
            delete_cell,
        ));
    }

    let delete_header = if with_delete_links { "<th></th>" } else { "" };
    format!(
        r#"<table>
<tr><th>ID</th><th>Song</th><th>Singer</th><th>Release Year</th>{delete_header}</tr>
{rows}</table>"#,
    )
}

/// The Error view: rendered whenever a page cannot recover
pub fn render_error_page() -> Html<String> {
    render_page(
        "Error",
        r#"<h2>Error</h2>
<p class="empty">An error occurred while processing your request. Please try again.</p>
<a class="button" href="/">Back to catalog</a>"#,
    )
}
