use clap::Parser;
use idiom_slides::{cli, config, export, logging};
use idiom_slides::error::Result;
use idiom_slides_common::{csv_loader, export::read_slide_texts, sampler};
use cli::{Cli, Commands};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut layout = config::load_layout(cli.config.as_deref())?;

    match cli.command {
        Commands::Load { csv, source } => {
            source.apply(&mut layout);
            let items = csv_loader::load(&csv, layout.start_row, layout.start_column)?;

            println!("📖 {} ({}个)\n", csv.display(), items.len());
            for (index, item) in items.iter().enumerate() {
                println!("{:>4}. {}", index + 1, item);
            }
        }

        Commands::Sample { csv, source, count, seed } => {
            source.apply(&mut layout);
            let count = count.unwrap_or(layout.sample_count);
            let items = csv_loader::load(&csv, layout.start_row, layout.start_column)?;

            let mut rng = make_rng(seed);
            let picked = sampler::sample(&items, count, &mut rng);

            println!("🎲 从{}个成语中选取{}个\n", items.len(), picked.len());
            for (index, item) in picked.iter().enumerate() {
                println!("{:>4}. {}", index + 1, item);
            }
        }

        Commands::Export { csv, output, source, layout: layout_args, count, seed, title, yes } => {
            println!("📄 idiom-slides - 导出\n");

            source.apply(&mut layout);
            layout_args.apply(&mut layout);
            if let Some(count) = count {
                layout.sample_count = count;
            }

            let output_path = export::output_path_for(&output, &title);
            export::confirm_overwrite(&output_path, yes)?;

            let mut rng = make_rng(seed);
            let report = export::run_export(&csv, &output_path, layout, &title, &mut rng)?;

            println!("✔ PPTX输出: {}", report.path.display());
            println!("\n✅ 成语幻灯片导出成功");
        }

        Commands::Inspect { pptx } => {
            let slides = read_slide_texts(&pptx)?;
            println!("📑 {} ({}页)\n", pptx.display(), slides.len());
            for (index, texts) in slides.iter().enumerate() {
                println!("{:>4}. {}", index + 1, texts.join(" | "));
            }
        }

        Commands::Config { show } => {
            if let Some(path) = config::default_config_path() {
                println!("配置文件: {}", path.display());
            }
            if show {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!("  成语数量: {}", layout.sample_count);
                println!("  字体: {}", layout.font_name);
                println!("  起始行/列: {}/{}", layout.start_row, layout.start_column);
                println!("  字体大小: {}pt", layout.font_size);
                println!(
                    "  文本框: {}×{}pt @ ({}, {})",
                    layout.box_width, layout.box_height, layout.box_left, layout.box_top
                );
            }
        }
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
