use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::error::Error;
use vote_codec::prelude::*;
use vote_codec::program;
use vote_codec::solana_program::system_instruction::SystemInstruction;
use vote_codec::solana_program::{system_program, sysvar};

fn random_pubkey(rng: &mut impl Rng) -> Pubkey {
    Pubkey::new_from_array(rng.gen())
}

fn random_vote_init(rng: &mut impl Rng) -> VoteInit {
    VoteInit::new(
        random_pubkey(rng),
        random_pubkey(rng),
        random_pubkey(rng),
        rng.gen_range(0, 101),
    )
}

#[test]
fn withdraw_wire_format() -> Result<(), Box<dyn Error>> {
    let vote = Pubkey::new_unique();
    let withdrawer = Pubkey::new_unique();
    let to = Pubkey::new_unique();
    let instruction = withdraw(&vote, &withdrawer, 1_000_000, &to)?;

    let mut expected_data = vec![3, 0, 0, 0];
    expected_data.extend_from_slice(&1_000_000i64.to_le_bytes());
    assert_eq!(instruction.program_id, program::id());
    assert_eq!(instruction.data, expected_data);
    assert_eq!(
        instruction.accounts,
        vec![
            AccountMeta::new(vote, false),
            AccountMeta::new(to, false),
            AccountMeta::new_readonly(withdrawer, true),
        ]
    );

    assert_eq!(
        decode_withdraw(&instruction)?,
        WithdrawParams {
            vote_pubkey: vote,
            authorized_withdrawer_pubkey: withdrawer,
            lamports: 1_000_000,
            to_pubkey: to,
        }
    );
    Ok(())
}

#[test]
fn initialize_account_positions() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let vote = random_pubkey(&mut rng);
    let init = random_vote_init(&mut rng);
    let instruction = initialize_account(&vote, &init.node_pubkey, &init)?;

    let keys = &instruction.accounts;
    assert_eq!(keys.len(), 4);
    assert_eq!(keys[0].pubkey, vote);
    assert!(keys[0].is_writable);
    assert!(!keys[0].is_signer);
    assert_eq!(keys[1].pubkey, sysvar::rent::id());
    assert_eq!(keys[2].pubkey, sysvar::clock::id());
    for key in &keys[1..3] {
        assert!(!key.is_signer);
        assert!(!key.is_writable);
    }
    assert_eq!(keys[3].pubkey, init.node_pubkey);
    assert!(keys[3].is_signer);

    assert_eq!(instruction.data.len(), 101);
    assert_eq!(&instruction.data[..4], &[0, 0, 0, 0]);
    assert_eq!(&instruction.data[4..36], init.node_pubkey.as_ref());
    assert_eq!(&instruction.data[36..68], init.authorized_voter.as_ref());
    assert_eq!(&instruction.data[68..100], init.authorized_withdrawer.as_ref());
    assert_eq!(instruction.data[100], init.commission);
    Ok(())
}

#[test]
fn build_then_decode_is_identity() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for _ in 0..64 {
        let init = InitializeAccountParams {
            vote_pubkey: random_pubkey(&mut rng),
            node_pubkey: random_pubkey(&mut rng),
            vote_init: random_vote_init(&mut rng),
        };
        let instruction =
            initialize_account(&init.vote_pubkey, &init.node_pubkey, &init.vote_init)?;
        assert_eq!(decode_initialize_account(&instruction)?, init);
        assert_eq!(
            decode_instruction_type(&instruction)?,
            VoteInstructionKind::InitializeAccount
        );
        assert_eq!(
            decode_instruction(&instruction)?.kind(),
            VoteInstructionKind::InitializeAccount
        );

        let params = WithdrawParams {
            vote_pubkey: random_pubkey(&mut rng),
            authorized_withdrawer_pubkey: random_pubkey(&mut rng),
            lamports: rng.gen_range(0, i64::MAX as u64),
            to_pubkey: random_pubkey(&mut rng),
        };
        let instruction = VoteInstruction::from(params).to_instruction()?;
        let decoded = decode_instruction(&instruction)?;
        assert_eq!(decoded.kind(), VoteInstructionKind::Withdraw);
        assert_eq!(decoded, VoteInstruction::Withdraw(params));
        validate_account_roles(&instruction, VoteInstructionKind::Withdraw)?;
    }
    Ok(())
}

#[test]
fn decode_then_encode_is_identity() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let instruction = initialize_account(
        &random_pubkey(&mut rng),
        &random_pubkey(&mut rng),
        &random_vote_init(&mut rng),
    )?;
    let layout = VoteInstructionKind::InitializeAccount.layout();
    let fields = decode(layout, &instruction.data)?;
    assert_eq!(encode(layout, &fields)?, instruction.data);

    let rebuilt = decode_instruction(&instruction)?.to_instruction()?;
    assert_eq!(rebuilt, instruction);
    Ok(())
}

#[test]
fn create_account_and_initialize_ordering() -> Result<(), Box<dyn Error>> {
    let from = Pubkey::new_unique();
    let vote = Pubkey::new_unique();
    let init = VoteInit::new(
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        10,
    );
    let instructions = create_account_and_initialize(&from, &vote, &init, 27_000_000)?;
    assert_eq!(instructions.len(), 2);

    let create = &instructions[0];
    assert_eq!(create.program_id, system_program::id());
    assert_eq!(create.accounts[0].pubkey, from);
    assert_eq!(create.accounts[1].pubkey, vote);
    let create_data: SystemInstruction = bincode::deserialize(&create.data)?;
    assert_eq!(
        create_data,
        SystemInstruction::CreateAccount {
            lamports: 27_000_000,
            space: VOTE_STATE_SPACE,
            owner: program::id(),
        }
    );

    assert_eq!(
        instructions[1],
        initialize_account(&vote, &init.node_pubkey, &init)?
    );
    Ok(())
}

#[test]
fn create_account_with_custom_space() -> Result<(), Box<dyn Error>> {
    let vote = Pubkey::new_unique();
    let init = VoteInit::default();
    let instructions = create_account_and_initialize_with_space(
        &Pubkey::new_unique(),
        &vote,
        &init,
        1,
        3762,
    )?;
    let create_data: SystemInstruction = bincode::deserialize(&instructions[0].data)?;
    assert_matches::assert_matches!(
        create_data,
        SystemInstruction::CreateAccount { space: 3762, .. }
    );
    Ok(())
}
