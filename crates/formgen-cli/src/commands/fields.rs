use colored::Colorize;
use formgen::FormSchema;

pub fn execute(schema: &FormSchema) {
    if schema.is_empty() {
        println!("{}", "Schema has no fields".yellow());
        return;
    }

    for field in schema.fields() {
        println!(
            "{} {} {}",
            field.name().bold(),
            format!("({})", field.kind()).cyan(),
            field.label()
        );

        let rules = field.rules();
        if rules.is_empty() {
            println!("  rules:   {}", "none".dimmed());
        } else {
            println!("  rules:   {}", rules);
        }

        if !field.options().is_empty() {
            let options: Vec<String> = field
                .options()
                .iter()
                .map(|option| format!("{} ({})", option.value, option.label))
                .collect();
            println!("  options: {}", options.join(", "));
        }
    }
}
