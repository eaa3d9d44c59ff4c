// ==========================================
// 法院庭审排期系统 - CLI 主入口
// ==========================================
// 用法: court-case-aps -i input.json -o output.json [--strategy layered]
//       court-case-aps --test  (使用生成的测试数据)
// 退出码: 成功 0, 任何错误 1
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use court_case_aps::config::{DayConfig, MatchingOptions};
use court_case_aps::domain::Appointment;
use court_case_aps::generator::TestDataGenerator;
use court_case_aps::importer::{ScheduleRequest, ScheduleResponse};
use court_case_aps::{logging, AssignStrategy, ScheduleOrchestrator};
use std::collections::BTreeMap;
use std::fs;

#[derive(Parser)]
#[command(name = "court-case-aps", version, about = "法院庭审排期: 最大流匹配 + 冲突图着色")]
struct Args {
    /// 输入 JSON 文件路径
    #[arg(short, long)]
    input: Option<String>,

    /// 输出 JSON 文件路径
    #[arg(short, long, default_value = "output.json")]
    output: String,

    /// 使用生成的测试数据代替输入文件
    #[arg(long)]
    test: bool,

    /// 指派策略: combined / two-stage / layered
    #[arg(long, default_value = "layered")]
    strategy: String,

    /// 测试数据随机种子
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing::info!("==================================================");
    tracing::info!("法院庭审排期系统");
    tracing::info!("系统版本: {}", court_case_aps::VERSION);
    tracing::info!("==================================================");

    let strategy: AssignStrategy = args
        .strategy
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    // 读入或生成请求
    let request = if args.test {
        tracing::info!(seed = args.seed, "使用生成的测试数据");
        TestDataGenerator::new(args.seed).generate_request(48, 8, 8, 5, 30, 480, true)
    } else {
        let path = args
            .input
            .as_deref()
            .context("未指定输入文件,使用 -i <文件路径>")?;
        let content =
            fs::read_to_string(path).with_context(|| format!("无法读取输入文件: {}", path))?;
        ScheduleRequest::from_json(&content)?
    };

    let (meetings, judges, rooms, day_config) = request.into_parts();

    // 执行排期管线
    let orchestrator = ScheduleOrchestrator::new(MatchingOptions {
        strategy,
        ..MatchingOptions::default()
    });
    let appointments = orchestrator.run(&meetings, &judges, &rooms, &day_config)?;

    print_schedule(&appointments, &day_config);

    // 写出响应 JSON
    let response = ScheduleResponse::new(appointments);
    fs::write(&args.output, response.to_json_pretty()?)
        .with_context(|| format!("无法写出输出文件: {}", args.output))?;
    tracing::info!(output = %args.output, "输出文件写出完成");

    Ok(())
}

/// 按工作日打印排期表
fn print_schedule(appointments: &[Appointment], day_config: &DayConfig) {
    println!();
    println!("排期总览");
    println!("========");
    println!("工作日数: {}", day_config.work_days);
    println!("每日分钟数: {}", day_config.minutes_per_day);
    println!("时隙粒度: {} 分钟", day_config.granularity);
    println!("每日时隙数: {}", day_config.slots_per_day());
    println!("预约总数: {}", appointments.len());

    let mut by_day: BTreeMap<i32, Vec<&Appointment>> = BTreeMap::new();
    for appointment in appointments {
        by_day.entry(appointment.day).or_default().push(appointment);
    }

    for (day, mut day_appointments) in by_day {
        day_appointments.sort_by_key(|a| a.timeslot_start);

        println!();
        println!("第 {} 天:", day + 1);
        println!("{}", "-".repeat(64));
        println!(
            "{:>8} | {:>6} | {:>6} | {:>6} | {:>6} | {:>8}",
            "时间", "时隙", "会议", "法官", "法庭", "时长"
        );
        println!("{}", "-".repeat(64));
        for appointment in day_appointments {
            println!(
                "{:>8} | {:>6} | {:>6} | {:>6} | {:>6} | {:>5}min",
                day_config.format_timeslot(appointment.timeslot_start),
                appointment.timeslot_start,
                appointment.meeting_id,
                appointment.judge_id,
                appointment.room_id,
                appointment.duration_minutes,
            );
        }
    }
    println!();
}
