use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use todomatic_core::TaskStore;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Done")]
    done: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Task")]
    name: String,
}

pub fn render_list(store: &TaskStore) -> String {
    let summary = store.summary();
    let visible = store.visible();
    if visible.is_empty() {
        return summary;
    }

    let rows: Vec<TaskRow> = visible
        .into_iter()
        .map(|task| TaskRow {
            done: if task.completed { "x" } else { " " }.to_string(),
            id: task.id.to_string(),
            name: task.name.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    format!("{}\n{}", summary, table)
}

pub fn show_list(store: &TaskStore) {
    println!("{}", render_list(store));
}
