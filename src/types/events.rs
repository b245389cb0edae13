use alloy_sol_types::sol;

sol! {
    // Registry Events
    #[derive(Debug, PartialEq, Eq)]
    event EventRegistered(
        uint64 indexed event_id,
        address indexed manager,
        uint64 end_timestamp
    );

    #[derive(Debug, PartialEq, Eq)]
    event AccessLevelRegistered(
        uint64 indexed event_id,
        uint256 indexed token_id,
        string access_level,
        uint256 ticket_price,
        uint64 ticket_limit
    );

    // Ticket Events
    #[derive(Debug, PartialEq, Eq)]
    event TicketMinted(
        uint64 indexed event_id,
        uint256 indexed token_id,
        address indexed to,
        uint256 price_paid
    );

    #[derive(Debug, PartialEq, Eq)]
    event TransferSingle(
        address indexed operator,
        address indexed from,
        address indexed to,
        uint256 id,
        uint256 value
    );

    // Fund Events
    #[derive(Debug, PartialEq, Eq)]
    event DropReceived(
        uint64 indexed event_id,
        address indexed contributor,
        uint256 amount
    );

    #[derive(Debug, PartialEq, Eq)]
    event DropDistributed(
        uint64 indexed event_id,
        uint256 recipients,
        uint256 amount_each
    );

    #[derive(Debug, PartialEq, Eq)]
    event FundsWithdrawn(
        uint64 indexed event_id,
        address indexed manager,
        uint256 amount
    );

    #[derive(Debug, PartialEq, Eq)]
    event TransferAttempt(address indexed recipient, uint256 amount);

    // Administration Events
    #[derive(Debug, PartialEq, Eq)]
    event OwnershipTransferred(
        address indexed previous_owner,
        address indexed new_owner
    );

    #[derive(Debug, PartialEq, Eq)]
    event NexusTokenUpdated(address previous_token, address new_token);

    // Nexus Token Events
    #[derive(Debug, PartialEq, Eq)]
    event TokenMinted(
        address indexed from,
        address indexed token,
        uint256 value
    );

    #[derive(Debug, PartialEq, Eq)]
    event TokenRedeemed(
        address indexed from,
        address indexed token,
        uint256 value
    );

    #[derive(Debug, PartialEq, Eq)]
    event SupportedTokenUpdated(address indexed token, bool supported);
}
