use crate::common::EventDetails;

const NO_DESCRIPTION: &str = "No description provided.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the message telling `giver_name` they are buying for `receiver_name`.
pub fn render_assignment(
    giver_name: &str,
    receiver_name: &str,
    event: &EventDetails,
) -> RenderedMessage {
    let subject = format!("Your Secret Santa assignment for \"{}\"!", event.title);

    let html_description = event
        .description()
        .map(|d| {
            d.lines()
                .map(escape_html)
                .collect::<Vec<_>>()
                .join("<br/>")
        })
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let html = format!(
        "<p>Hi {giver},</p>\n\
         <p>Get ready for some fun! For the Secret Santa event \"<strong>{title}</strong>\", you are the Secret Santa of...</p>\n\
         <p style=\"font-size: 1.5em; font-weight: bold; margin: 1em 0;\">{receiver}</p>\n\
         <p><strong>Event description:</strong><br/>\n{description}</p>\n\
         <p>Happy gifting!</p>",
        giver = escape_html(giver_name),
        title = escape_html(&event.title),
        receiver = escape_html(receiver_name),
        description = html_description,
    );

    let text = format!(
        "Hi {giver},\n\n\
         Get ready for some fun! For the Secret Santa event \"{title}\", you are the Secret Santa of...\n\n\
         **{receiver}**!\n\n\
         Event description:\n{description}\n\n\
         Happy gifting!",
        giver = giver_name,
        title = event.title,
        receiver = receiver_name,
        description = event.description().unwrap_or(NO_DESCRIPTION),
    );

    RenderedMessage {
        subject,
        html,
        text,
    }
}
