//! Server-side HTML for the task pages. The full page wraps the list in a
//! layout with the add form; mutating endpoints return the list fragment only.

use crate::domain::task::Task;

pub fn page(tasks: &[Task]) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>To-Do</title></head>\n<body>\n\
         <h1>To-Do</h1>\n\
         <form action=\"/add\" method=\"post\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"New task\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n{}</body>\n</html>\n",
        fragment(tasks)
    )
}

pub fn fragment(tasks: &[Task]) -> String {
    let mut out = String::from("<ul id=\"task-list\">\n");
    for task in tasks {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let class = if task.completed { "task done" } else { "task" };
        out.push_str(&format!(
            "<li class=\"{class}\">\
             <form action=\"/toggle/{id}\" method=\"post\"><button type=\"submit\">{mark}</button></form> \
             <span>{title}</span> \
             <form action=\"/delete/{id}\" method=\"post\"><button type=\"submit\">delete</button></form>\
             </li>\n",
            id = task.id.0,
            title = escape(&task.title),
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
