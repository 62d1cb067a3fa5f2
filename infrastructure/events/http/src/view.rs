use events_models::Event;

use crate::{
    context::{PageContext, ViewMode},
    escape::{escape_html, nl2br},
};

const STYLE: &str = r#"
  body { font-family: Arial, sans-serif; background: #f5f7fb; color: #222; margin: 0; padding: 20px; }
  .container { max-width: 1000px; margin: 0 auto; }
  header { background: #2b74d4; color: #fff; padding: 18px; border-radius: 8px; margin-bottom: 18px; }
  h1 { margin: 0; font-size: 20px; }
  .card { background: #fff; padding: 16px; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.06); margin-bottom: 12px; }
  form .row { display: flex; gap: 10px; flex-wrap: wrap; }
  label { display: block; font-size: 13px; margin-bottom: 6px; }
  input[type="text"], input[type="date"], textarea { width: 100%; padding: 8px; border: 1px solid #d6dbe6; border-radius: 6px; }
  textarea { min-height: 80px; resize: vertical; }
  .col { flex: 1 1 200px; min-width: 200px; }
  .actions { margin-top: 10px; display:flex; gap:8px; align-items:center; }
  button { padding: 8px 12px; border-radius: 6px; border: none; cursor: pointer; }
  .btn-primary { background: #2b74d4; color: #fff; }
  .btn-secondary { background: #eef3fb; color: #2b74d4; border: 1px solid #d6e3fb; }
  .btn-danger { background: #f44336; color: #fff; }
  table { width: 100%; border-collapse: collapse; margin-top: 12px; }
  th, td { text-align: left; padding: 10px; border-bottom: 1px solid #eee; vertical-align: top; }
  .muted { color: #666; font-size: 13px; }
  .msg { padding: 10px; border-radius: 6px; margin-bottom: 12px; }
  .msg.error { background: #ffecec; color: #cc0000; border: 1px solid #f5b5b5; }
  .msg.success { background: #e7f8ee; color: #076738; border: 1px solid #b9e5c4; }
  @media (max-width:700px) { .row { flex-direction: column; } }
"#;

/// Renders the whole document. `base_path` is the path the page is served
/// from; edit links and the cancel link point back to it.
pub fn render_page(page: &PageContext, base_path: &str) -> String {
    let base = escape_html(base_path);
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta \
         charset=\"utf-8\">\n<meta name=\"viewport\" \
         content=\"width=device-width,initial-scale=1\">\n<title>Event \
         Manager</title>\n<style>",
    );
    html.push_str(STYLE);
    html.push_str(
        "</style>\n</head>\n<body>\n<div class=\"container\">\n  \
         <header>\n    <h1>Event Manager</h1>\n  </header>\n",
    );

    render_messages(&mut html, page);
    render_form(&mut html, &page.view_mode, &base);
    render_list(&mut html, &page.events, &base);

    html.push_str(
        "  <footer \
         style=\"text-align:center;color:#777;margin-top:18px;\
         font-size:13px\">\n    Add events | Delete events | Edit \
         events\n  </footer>\n</div>\n</body>\n</html>\n",
    );
    html
}

fn render_messages(html: &mut String, page: &PageContext) {
    if !page.errors.is_empty() {
        html.push_str("  <div class=\"msg error\">\n");
        for err in &page.errors {
            html.push_str(&format!("    <div>{}</div>\n", escape_html(err)));
        }
        html.push_str("  </div>\n");
    }

    if let Some(success) = &page.success {
        html.push_str(&format!(
            "  <div class=\"msg success\">{}</div>\n",
            escape_html(success)
        ));
    }
}

fn render_form(html: &mut String, mode: &ViewMode, base: &str) {
    let editing = match mode {
        ViewMode::Edit(event) => Some(event),
        ViewMode::Create => None,
    };
    let (title, action, submit) = match editing {
        Some(_) => ("Edit Event", "update", "Update Event"),
        None => ("Add New Event", "create", "Add Event"),
    };
    let value = |pick: fn(&Event) -> String| {
        editing.map(|event| escape_html(&pick(event))).unwrap_or_default()
    };

    html.push_str(&format!(
        "  <div class=\"card\">\n    <h3>{title}</h3>\n    <form \
         method=\"post\" action=\"\">\n      <input type=\"hidden\" \
         name=\"action\" value=\"{action}\">\n"
    ));
    if let Some(event) = editing {
        html.push_str(&format!(
            "      <input type=\"hidden\" name=\"id\" value=\"{}\">\n",
            event.id
        ));
    }

    html.push_str(&format!(
        "      <div class=\"row\">\n        <div class=\"col\">\n          \
         <label for=\"name\">Event Name</label>\n          <input \
         id=\"name\" name=\"name\" type=\"text\" value=\"{}\" required>\n        \
         </div>\n        <div class=\"col\">\n          <label \
         for=\"event_date\">Date</label>\n          <input id=\"event_date\" \
         name=\"event_date\" type=\"date\" value=\"{}\" required>\n        \
         </div>\n        <div class=\"col\">\n          <label \
         for=\"location\">Location</label>\n          <input id=\"location\" \
         name=\"location\" type=\"text\" value=\"{}\" required>\n        \
         </div>\n      </div>\n",
        value(|e| e.name.clone()),
        value(Event::event_date_display),
        value(|e| e.location.clone()),
    ));

    html.push_str(&format!(
        "      <div style=\"margin-top:10px\">\n        <label \
         for=\"description\">Description</label>\n        <textarea \
         id=\"description\" name=\"description\">{}</textarea>\n      \
         </div>\n",
        value(|e| e.description.clone()),
    ));

    html.push_str(&format!(
        "      <div class=\"actions\">\n        <button type=\"submit\" \
         class=\"btn-primary\">{submit}</button>\n"
    ));
    if editing.is_some() {
        html.push_str(&format!(
            "        <a href=\"{base}\" class=\"btn-secondary\" \
             style=\"display:inline-block;padding:8px 12px;\
             text-decoration:none;border-radius:6px;\">Cancel</a>\n"
        ));
    }
    html.push_str("      </div>\n    </form>\n  </div>\n");
}

fn render_list(html: &mut String, events: &[Event], base: &str) {
    html.push_str(&format!(
        "  <div class=\"card\">\n    <h3>All Events ({})</h3>\n",
        events.len()
    ));

    if events.is_empty() {
        html.push_str(
            "    <div class=\"muted\">No events yet. Add one above.</div>\n  \
             </div>\n",
        );
        return;
    }

    html.push_str(
        "    <table>\n      <thead>\n        <tr>\n          \
         <th>Event</th>\n          <th>Date</th>\n          \
         <th>Location</th>\n          <th>Description</th>\n          <th \
         style=\"width:170px\">Actions</th>\n        </tr>\n      \
         </thead>\n      <tbody>\n",
    );
    for event in events {
        render_row(html, event, base);
    }
    html.push_str("      </tbody>\n    </table>\n  </div>\n");
}

fn render_row(html: &mut String, event: &Event, base: &str) {
    html.push_str(&format!(
        "        <tr>\n          <td><strong>{name}</strong><div \
         class=\"muted\">Created: {created}</div></td>\n          \
         <td>{date}</td>\n          <td>{location}</td>\n          \
         <td>{description}</td>\n          <td>\n            <a \
         class=\"btn-secondary\" href=\"{base}?edit={id}\" \
         style=\"text-decoration:none;padding:6px 8px;border-radius:6px;\">\
         Edit</a>\n            <form method=\"post\" action=\"\" \
         style=\"display:inline-block;margin-left:6px;\" \
         onsubmit=\"return confirm('Delete this event?');\">\n              \
         <input type=\"hidden\" name=\"action\" value=\"delete\">\n              \
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n              \
         <button type=\"submit\" class=\"btn-danger\">Delete</button>\n            \
         </form>\n          </td>\n        </tr>\n",
        name = escape_html(&event.name),
        created = escape_html(&event.created_at_display()),
        date = escape_html(&event.event_date_display()),
        location = escape_html(&event.location),
        description = nl2br(&escape_html(&event.description)),
        id = event.id,
    ));
}
