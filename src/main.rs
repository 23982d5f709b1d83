use atm_simulator::engine::{
    Account, AccountOperationError, Amount, Authenticator, currency, parse_amount,
    signed_currency, write_statement,
};
use simple_logger::SimpleLogger;
use std::collections::HashMap;
use std::error::Error;
use std::io::{self, Write};
use std::str::FromStr;

const INITIAL_BALANCE: &str = "1000";

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let authenticator = Authenticator::new(credential_table());

    let Some(account_number) = prompt("Enter your 16-digit account number: ")? else {
        return Ok(());
    };
    let Some(pin) = prompt("Enter your PIN: ")? else {
        return Ok(());
    };

    if !authenticator.authenticate(&account_number, &pin) {
        log::warn!("Authentication failed for account {account_number}");
        println!("Authentication failed! Invalid account number or PIN.");
        std::process::exit(1);
    }
    log::debug!("Authentication succeeded for account {account_number}");

    let initial_balance = Amount::from_str(INITIAL_BALANCE)?;
    let mut account = Account::new("User", &account_number, initial_balance);

    println!("Welcome, {}", account.holder_name());
    run_menu(&mut account)?;

    log::debug!("Application finished");

    Ok(())
}

/// Predefined accounts and PINs, injected into the Authenticator.
fn credential_table() -> HashMap<String, String> {
    HashMap::from([
        ("1234567890123456".to_owned(), "1234".to_owned()),
        ("9876543210987654".to_owned(), "4321".to_owned()),
    ])
}

fn run_menu(account: &mut Account) -> Result<(), Box<dyn Error>> {
    loop {
        print_menu();
        let Some(choice) = prompt("Select an option: ")? else {
            break;
        };
        log::debug!("Menu selection: {choice:?}");

        match choice.as_str() {
            "1" => perform_withdrawal(account)?,
            "2" => perform_deposit(account)?,
            "3" => println!("Current Balance: {}", currency(account.balance())),
            "4" => perform_transfer(account)?,
            "5" => show_mini_statement(account),
            "6" => export_statement(account)?,
            "7" => {
                println!("Goodbye.");
                break;
            }
            other => println!("Unrecognised option: {other}"),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("===== ATM SIMULATOR =====");
    println!("1. Cash Withdrawal");
    println!("2. Deposit");
    println!("3. Balance Inquiry");
    println!("4. Fund Transfer");
    println!("5. Mini-Statement");
    println!("6. Export Statement (CSV)");
    println!("7. Exit");
}

/// Show `message` and read one trimmed line from stdin.
/// Returns None once stdin is closed.
fn prompt(message: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        log::debug!("Input closed, ending session");
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Prompt for an amount and run it through the validation gate.
/// Returns None when the input is rejected or stdin is closed; the rejection
/// message has already been shown.
fn prompt_amount(message: &str) -> Result<Option<Amount>, Box<dyn Error>> {
    let Some(input) = prompt(message)? else {
        return Ok(None);
    };
    match parse_amount(&input) {
        Ok(amount) => Ok(Some(amount)),
        Err(e) => {
            log::warn!("Rejected amount input {input:?}: {e}");
            println!("{e}");
            Ok(None)
        }
    }
}

fn perform_withdrawal(account: &mut Account) -> Result<(), Box<dyn Error>> {
    let Some(amount) = prompt_amount("Enter amount to withdraw: ")? else {
        return Ok(());
    };
    match account.withdraw(amount) {
        Ok(()) => println!("Withdrawal successful!"),
        Err(AccountOperationError::InsufficientFunds { .. }) => {
            log::warn!("Withdrawal of {amount} rejected: insufficient funds");
            println!("Insufficient funds.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn perform_deposit(account: &mut Account) -> Result<(), Box<dyn Error>> {
    let Some(amount) = prompt_amount("Enter amount to deposit: ")? else {
        return Ok(());
    };
    account.deposit(amount)?;
    println!("Deposit successful!");
    Ok(())
}

fn perform_transfer(account: &mut Account) -> Result<(), Box<dyn Error>> {
    let Some(to_account) = prompt("Enter the recipient account number: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount("Enter amount to transfer: ")? else {
        return Ok(());
    };
    match account.transfer(amount, &to_account) {
        Ok(()) => println!("Fund transfer successful!"),
        Err(AccountOperationError::InsufficientFunds { .. }) => {
            log::warn!("Transfer of {amount} to {to_account} rejected: insufficient funds");
            println!("Insufficient funds.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn show_mini_statement(account: &Account) {
    println!("{:<28} {:>14} {:>14}", "Type", "Amount", "Balance");
    for record in account.history() {
        println!(
            "{:<28} {:>14} {:>14}",
            record.kind.to_string(),
            signed_currency(record.amount),
            currency(record.balance)
        );
    }
}

fn export_statement(account: &Account) -> Result<(), Box<dyn Error>> {
    log::debug!("Exporting statement to stdout: Started");
    write_statement(account.history(), io::stdout())?;
    log::debug!("Exporting statement to stdout: Done");
    Ok(())
}
