use jvm_runner_core::{Action, JavaCommand};

pub fn print_command_breakdown(command: &JavaCommand, action: Action) {
    println!("\n🔧 {action}:");

    let Some(args) = command.args_for(action) else {
        println!("      • skipped (no separate {action} step)");
        return;
    };

    if let Some(task) = args.iter().find(|a| !a.starts_with('-')) {
        println!("      • target: {task}");
    }

    let flags: Vec<_> = args.iter().filter(|a| a.starts_with('-')).collect();
    if !flags.is_empty() {
        println!("      • flags: {flags:?}");
    }

    if let Some(shell) = command.to_shell_command(action) {
        println!("   🚀 Final command: {shell}");
    }
}
