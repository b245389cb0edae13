use alloy_sol_types::SolEvent;
use nexus_event_gate::types::events::{
    AccessLevelRegistered, DropDistributed, DropReceived, EventRegistered, FundsWithdrawn,
    TicketMinted, TransferAttempt, TransferSingle,
};
use nexus_event_gate::{generate_token_id, GateConfig};

fn main() {
    let config = GateConfig::default();

    println!("Nexus Event Gate");
    println!("================");
    println!();
    println!("Ticket access-level registry and two-phase event registration.");
    println!("Gate address: {}", config.contract_address);
    println!("Ticket URI base: {}", config.base_uri);
    println!();
    println!("Components:");
    println!("- Event Registry: live and community event registration");
    println!("- Access-Level Ledger: per-event tiers and token ids");
    println!("- Ticket Minter: soulbound ERC-1155 tickets");
    println!("- Fund Collector: ticket sales and community drops");
    println!("- Nexus Token Vault: fan-token deposits backing community access");
    println!("- Registration Workflow: attest, then register");
    println!();
    println!("Logged events:");
    for signature in [
        EventRegistered::SIGNATURE,
        AccessLevelRegistered::SIGNATURE,
        TicketMinted::SIGNATURE,
        TransferSingle::SIGNATURE,
        DropReceived::SIGNATURE,
        DropDistributed::SIGNATURE,
        FundsWithdrawn::SIGNATURE,
        TransferAttempt::SIGNATURE,
    ] {
        println!("- {signature}");
    }
    println!();
    println!(
        "Example token id (event 1, \"VIP\"): {:#x}",
        generate_token_id(1, "VIP")
    );
}
