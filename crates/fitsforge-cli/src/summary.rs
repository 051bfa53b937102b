use console::Style;
use fitsforge_core::batch::BatchReport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    failed: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            failed: Style::new().red(),
        }
    }
}

pub fn print_batch_summary(report: &BatchReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Batch Conversion"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<12}{}",
        s.label.apply_to("Converted"),
        s.value.apply_to(report.converted.len())
    );

    let failed_style = if report.failed.is_empty() {
        &s.value
    } else {
        &s.failed
    };
    println!(
        "  {:<12}{}",
        s.label.apply_to("Failed"),
        failed_style.apply_to(report.failed.len())
    );

    for failure in &report.failed {
        println!(
            "    {}  {}",
            s.failed.apply_to(failure.input.display()),
            s.label.apply_to(&failure.error)
        );
    }
    println!();
}
