use clap::Parser;
use moving_sale::{cli, compress, config, error, read_catalog_text, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use moving_sale_common::{catalog, csv, page};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 引数エラーも終了コード1に揃える
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// 設定を読み込む。壊れていれば警告して既定値で続行
fn load_config_or_default() -> Config {
    Config::load().unwrap_or_else(|e| {
        eprintln!("⚠ 設定ファイルを読めないため既定値を使います: {}", e);
        Config::default()
    })
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render { input, output, page: full_page, title } => {
            let input = input.unwrap_or_else(|| load_config_or_default().data_file);
            let text = read_catalog_text(&input)?;
            let items = catalog::load_catalog(&text);

            let grid = catalog::render_all(&items);
            let html = if full_page { page::render_page(&title, &grid) } else { grid };

            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    println!("✔ {}件を出力: {}", items.len(), path.display());
                }
                None => print!("{}", html),
            }
        }

        Commands::Check { input, json } => {
            let input = input.unwrap_or_else(|| load_config_or_default().data_file);
            let text = read_catalog_text(&input)?;
            let table = csv::parse_table(&text);
            let items: Vec<_> = table.rows.iter().map(catalog::normalize).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                println!("📋 moving-sale - 出品リスト確認\n");
                println!("ファイル: {}", input.display());
                report::CatalogSummary::build(&table, &items).print();
            }
        }

        Commands::Compress { folder, max_size, quality, force } => {
            println!("🗜 moving-sale - 画像一括圧縮\n");

            let config = load_config_or_default();
            let options = compress::CompressOptions {
                max_size: max_size.unwrap_or(config.max_image_size),
                quality: quality.unwrap_or(config.jpeg_quality),
                force,
            };
            if cli.verbose {
                println!("最大サイズ: {}px / JPEG品質: {}", options.max_size, options.quality);
            }

            println!("[1/2] 画像を処理中...");
            let summary = compress::compress_folder(&folder, options, cli.verbose)?;
            println!("✔ {}枚を処理\n", summary.total());

            println!("[2/2] 結果");
            println!("  圧縮: {}枚", summary.compressed);
            println!("  スキップ（圧縮済み）: {}枚", summary.skipped);
            println!("  変更なし: {}枚", summary.unchanged);
            if summary.compressed > 0 {
                println!(
                    "  サイズ: {} → {}",
                    compress::format_bytes(summary.bytes_before),
                    compress::format_bytes(summary.bytes_after)
                );
            }
            for (file_name, reason) in &summary.failed {
                eprintln!("⚠ {}: {}", file_name, reason);
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_data_file, set_max_size, set_quality, show } => {
            let mut config = Config::load()?;
            let mut changed = false;

            if let Some(path) = set_data_file {
                config.data_file = path;
                changed = true;
            }
            if let Some(size) = set_max_size {
                config.set_max_image_size(size)?;
                changed = true;
            }
            if let Some(quality) = set_quality {
                config.set_jpeg_quality(quality)?;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  出品リスト: {}", config.data_file.display());
                println!("  最大画像サイズ: {}px", config.max_image_size);
                println!("  JPEG品質: {}", config.jpeg_quality);
            }
        }
    }

    Ok(())
}
