use std::env;
use std::fs;
use std::process;

use console::Style;
use gendiff::{configure, elided_len, group_hunks, Op, SliceCompare};

fn main() {
    let args: Vec<_> = env::args_os().collect();
    if args.len() != 3 {
        eprintln!("usage: lines [old] [new]");
        process::exit(1);
    }

    let old = fs::read_to_string(&args[1]).unwrap();
    let new = fs::read_to_string(&args[2]).unwrap();
    let old_lines: Vec<_> = old.lines().collect();
    let new_lines: Vec<_> = new.lines().collect();

    let diffs = configure()
        .max_cells(Some(1 << 26))
        .context_len(Some(3))
        .diff(&SliceCompare::new(&old_lines, &new_lines))
        .unwrap();

    if diffs.is_empty() {
        println!("{}", Style::new().dim().apply_to("files are identical"));
        return;
    }

    let hunks = group_hunks(&diffs);
    for (idx, hunk) in hunks.iter().enumerate() {
        if idx > 0 {
            let prev = hunks[idx - 1].last().unwrap();
            let skipped = elided_len(prev, &hunk[0]);
            println!(
                "{}",
                Style::new()
                    .cyan()
                    .apply_to(format!("@@ {} lines skipped @@", skipped))
            );
        }
        for diff in hunk.iter() {
            let (sign, style, lines) = match diff.op {
                Op::Match => (" ", Style::new().dim(), &old_lines[diff.left_range()]),
                Op::Delete => ("-", Style::new().red(), &old_lines[diff.left_range()]),
                Op::Insert => ("+", Style::new().green(), &new_lines[diff.right_range()]),
            };
            for line in lines {
                println!("{}{}", style.apply_to(sign).bold(), style.apply_to(line));
            }
        }
    }
}
